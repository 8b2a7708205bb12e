//! Partner aggregate.
//!
//! The partner is the person whose cycle is tracked. Each app user owns at
//! most one partner, and every period and daily log hangs off it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::cycle::{
    PartnerConfig, CYCLE_LENGTH_MAX, CYCLE_LENGTH_MIN, DEFAULT_CYCLE_LENGTH,
    DEFAULT_PERIOD_LENGTH, PERIOD_LENGTH_MAX, PERIOD_LENGTH_MIN,
};
use crate::domain::foundation::{PartnerId, Timestamp, UserId, ValidationError};

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_TIMEZONE_LENGTH: usize = 50;
pub const REMINDER_DAYS_MIN: i32 = 1;
pub const REMINDER_DAYS_MAX: i32 = 7;
pub const DEFAULT_REMINDER_DAYS: i32 = 3;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// How predictable the partner's cycle is, as reported by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleRegularity {
    #[default]
    Regular,
    SomewhatIrregular,
    Irregular,
}

impl CycleRegularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleRegularity::Regular => "regular",
            CycleRegularity::SomewhatIrregular => "somewhat_irregular",
            CycleRegularity::Irregular => "irregular",
        }
    }
}

impl fmt::Display for CycleRegularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CycleRegularity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(CycleRegularity::Regular),
            "somewhat_irregular" => Ok(CycleRegularity::SomewhatIrregular),
            "irregular" => Ok(CycleRegularity::Irregular),
            other => Err(ValidationError::invalid_format(
                "cycle_regularity",
                format!("unknown regularity '{}'", other),
            )),
        }
    }
}

/// Which heads-up notifications the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub period_reminder: bool,
    pub pms_alert: bool,
    pub ovulation_alert: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            period_reminder: true,
            pms_alert: true,
            ovulation_alert: false,
        }
    }
}

/// Partial changes to a partner profile. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerUpdate {
    pub name: Option<String>,
    pub cycle_length: Option<i32>,
    pub period_length: Option<i32>,
    pub cycle_regularity: Option<CycleRegularity>,
    pub last_period_start: Option<NaiveDate>,
    pub period_reminder: Option<bool>,
    pub pms_alert: Option<bool>,
    pub ovulation_alert: Option<bool>,
    pub reminder_days_before: Option<i32>,
    pub timezone: Option<String>,
}

/// What an applied update changed that affects stored forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleChange {
    pub cycle_length: bool,
    pub period_length: bool,
    pub last_period_start: bool,
}

impl CycleChange {
    pub fn any(&self) -> bool {
        self.cycle_length || self.period_length || self.last_period_start
    }
}

/// Partner profile.
///
/// # Invariants
///
/// - `name` is 1-50 characters after trimming
/// - `cycle_length` is 21-35, `period_length` is 3-7
/// - `reminder_days_before` is 1-7
/// - `timezone` is 1-50 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    id: PartnerId,
    user_id: UserId,
    name: String,
    cycle_length: i32,
    period_length: i32,
    cycle_regularity: CycleRegularity,
    last_period_start: Option<NaiveDate>,
    notifications: NotificationPreferences,
    reminder_days_before: i32,
    timezone: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Partner {
    /// Creates a partner with default cycle settings, then applies `settings`.
    pub fn new(
        id: PartnerId,
        user_id: UserId,
        name: String,
        settings: PartnerUpdate,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(&name)?;
        let now = Timestamp::now();
        let mut partner = Self {
            id,
            user_id,
            name,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            period_length: DEFAULT_PERIOD_LENGTH,
            cycle_regularity: CycleRegularity::default(),
            last_period_start: None,
            notifications: NotificationPreferences::default(),
            reminder_days_before: DEFAULT_REMINDER_DAYS,
            timezone: DEFAULT_TIMEZONE.to_string(),
            created_at: now,
            updated_at: now,
        };
        partner.apply(settings)?;
        partner.updated_at = partner.created_at;
        Ok(partner)
    }

    /// Rebuilds a partner from storage without validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PartnerId,
        user_id: UserId,
        name: String,
        cycle_length: i32,
        period_length: i32,
        cycle_regularity: CycleRegularity,
        last_period_start: Option<NaiveDate>,
        notifications: NotificationPreferences,
        reminder_days_before: i32,
        timezone: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            cycle_length,
            period_length,
            cycle_regularity,
            last_period_start,
            notifications,
            reminder_days_before,
            timezone,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PartnerId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cycle_length(&self) -> i32 {
        self.cycle_length
    }

    pub fn period_length(&self) -> i32 {
        self.period_length
    }

    pub fn cycle_regularity(&self) -> CycleRegularity {
        self.cycle_regularity
    }

    pub fn last_period_start(&self) -> Option<NaiveDate> {
        self.last_period_start
    }

    pub fn notifications(&self) -> &NotificationPreferences {
        &self.notifications
    }

    pub fn reminder_days_before(&self) -> i32 {
        self.reminder_days_before
    }

    /// Stored for display; all date math runs in UTC.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Engine view of this profile.
    pub fn config(&self) -> PartnerConfig {
        PartnerConfig::new(self.cycle_length, self.period_length, self.last_period_start)
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update. All fields are validated before any change.
    pub fn apply(&mut self, update: PartnerUpdate) -> Result<CycleChange, ValidationError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        if let Some(v) = update.cycle_length {
            ValidationError::check_range("cycle_length", v, CYCLE_LENGTH_MIN, CYCLE_LENGTH_MAX)?;
        }
        if let Some(v) = update.period_length {
            ValidationError::check_range("period_length", v, PERIOD_LENGTH_MIN, PERIOD_LENGTH_MAX)?;
        }
        if let Some(v) = update.reminder_days_before {
            ValidationError::check_range(
                "reminder_days_before",
                v,
                REMINDER_DAYS_MIN,
                REMINDER_DAYS_MAX,
            )?;
        }
        if let Some(v) = update.last_period_start {
            ValidationError::check_date("last_period_start", v)?;
        }
        let timezone = update.timezone.as_deref().map(validate_timezone).transpose()?;

        let change = CycleChange {
            cycle_length: update.cycle_length.is_some_and(|v| v != self.cycle_length),
            period_length: update.period_length.is_some_and(|v| v != self.period_length),
            last_period_start: update
                .last_period_start
                .is_some_and(|v| Some(v) != self.last_period_start),
        };

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(v) = update.cycle_length {
            self.cycle_length = v;
        }
        if let Some(v) = update.period_length {
            self.period_length = v;
        }
        if let Some(v) = update.cycle_regularity {
            self.cycle_regularity = v;
        }
        if let Some(v) = update.last_period_start {
            self.last_period_start = Some(v);
        }
        if let Some(v) = update.period_reminder {
            self.notifications.period_reminder = v;
        }
        if let Some(v) = update.pms_alert {
            self.notifications.pms_alert = v;
        }
        if let Some(v) = update.ovulation_alert {
            self.notifications.ovulation_alert = v;
        }
        if let Some(v) = update.reminder_days_before {
            self.reminder_days_before = v;
        }
        if let Some(tz) = timezone {
            self.timezone = tz;
        }
        self.updated_at = Timestamp::now();
        Ok(change)
    }

    /// Moves the cycle anchor to a newly logged period start.
    pub fn record_period_start(&mut self, start_date: NaiveDate) {
        self.last_period_start = Some(start_date);
        self.updated_at = Timestamp::now();
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    ValidationError::check_length("name", Some(trimmed), MAX_NAME_LENGTH)?;
    Ok(trimmed.to_string())
}

fn validate_timezone(tz: &str) -> Result<String, ValidationError> {
    let trimmed = tz.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("timezone"));
    }
    ValidationError::check_length("timezone", Some(trimmed), MAX_TIMEZONE_LENGTH)?;
    Ok(trimmed.to_string())
}
