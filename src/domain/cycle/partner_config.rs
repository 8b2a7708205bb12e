//! The slice of a partner profile that drives cycle calculations.

use chrono::NaiveDate;

use crate::domain::foundation::ValidationError;

pub const CYCLE_LENGTH_MIN: i32 = 21;
pub const CYCLE_LENGTH_MAX: i32 = 35;
pub const PERIOD_LENGTH_MIN: i32 = 3;
pub const PERIOD_LENGTH_MAX: i32 = 7;
pub const DEFAULT_CYCLE_LENGTH: i32 = 28;
pub const DEFAULT_PERIOD_LENGTH: i32 = 5;

/// Cycle parameters for one calculation.
///
/// Lengths are validated on construction so every engine function can
/// assume a positive cycle length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerConfig {
    cycle_length: i32,
    period_length: i32,
    last_period_start: Option<NaiveDate>,
}

impl PartnerConfig {
    pub fn new(
        cycle_length: i32,
        period_length: i32,
        last_period_start: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        ValidationError::check_range(
            "cycle_length",
            cycle_length,
            CYCLE_LENGTH_MIN,
            CYCLE_LENGTH_MAX,
        )?;
        ValidationError::check_range(
            "period_length",
            period_length,
            PERIOD_LENGTH_MIN,
            PERIOD_LENGTH_MAX,
        )?;
        Ok(Self {
            cycle_length,
            period_length,
            last_period_start,
        })
    }

    pub fn cycle_length(&self) -> i32 {
        self.cycle_length
    }

    pub fn period_length(&self) -> i32 {
        self.period_length
    }

    pub fn last_period_start(&self) -> Option<NaiveDate> {
        self.last_period_start
    }
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            cycle_length: DEFAULT_CYCLE_LENGTH,
            period_length: DEFAULT_PERIOD_LENGTH,
            last_period_start: None,
        }
    }
}
