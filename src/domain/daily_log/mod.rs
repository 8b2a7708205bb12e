//! Daily log domain module.
//!
//! One check-in per partner per day: mood, energy, symptom tags and notes.

mod errors;
mod log;

pub use errors::DailyLogError;
pub use log::{
    normalize_symptoms, DailyLog, DailyLogUpdate, Mood, ENERGY_MAX, ENERGY_MIN, MAX_NOTES_LENGTH,
    MAX_SYMPTOM_LENGTH,
};
