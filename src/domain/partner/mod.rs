//! Partner domain module.
//!
//! The tracked partner's profile: display name, cycle settings and
//! notification preferences.

mod aggregate;
mod errors;

pub use aggregate::{
    CycleChange, CycleRegularity, NotificationPreferences, Partner, PartnerUpdate,
    DEFAULT_REMINDER_DAYS, DEFAULT_TIMEZONE, MAX_NAME_LENGTH, MAX_TIMEZONE_LENGTH,
    REMINDER_DAYS_MAX, REMINDER_DAYS_MIN,
};
pub use errors::PartnerError;
