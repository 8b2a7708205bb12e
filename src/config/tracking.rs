//! Limits and forecast depth for the cycle engine's inputs.

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for forecast generation.
pub const MAX_FORECAST_CYCLES: u32 = 12;

/// Tracking configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackingConfig {
    /// Most recent actual period logs used for pattern averages
    #[serde(default = "default_pattern_period_log_limit")]
    pub pattern_period_log_limit: u32,

    /// Most recent daily logs used for per-phase trends
    #[serde(default = "default_pattern_daily_log_limit")]
    pub pattern_daily_log_limit: u32,

    /// Most recent period logs drawn on a calendar month
    #[serde(default = "default_calendar_period_log_limit")]
    pub calendar_period_log_limit: u32,

    /// Predicted periods written after each new anchor
    #[serde(default = "default_forecast_cycles")]
    pub forecast_cycles: u32,
}

impl TrackingConfig {
    /// Validate tracking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let limits = [
            ("pattern_period_log_limit", self.pattern_period_log_limit),
            ("pattern_daily_log_limit", self.pattern_daily_log_limit),
            ("calendar_period_log_limit", self.calendar_period_log_limit),
        ];
        for (name, value) in limits {
            if !(1..=100).contains(&value) {
                return Err(ValidationError::InvalidTrackingLimit(name));
            }
        }
        if self.forecast_cycles > MAX_FORECAST_CYCLES {
            return Err(ValidationError::InvalidForecastCycles(MAX_FORECAST_CYCLES));
        }
        Ok(())
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            pattern_period_log_limit: default_pattern_period_log_limit(),
            pattern_daily_log_limit: default_pattern_daily_log_limit(),
            calendar_period_log_limit: default_calendar_period_log_limit(),
            forecast_cycles: default_forecast_cycles(),
        }
    }
}

fn default_pattern_period_log_limit() -> u32 {
    12
}

fn default_pattern_daily_log_limit() -> u32 {
    90
}

fn default_calendar_period_log_limit() -> u32 {
    12
}

fn default_forecast_cycles() -> u32 {
    3
}
