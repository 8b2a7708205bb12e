//! Period log domain module.
//!
//! A period log is either an actual, user-confirmed period or a synthetic
//! forecast. Forecasts are regenerated whenever a new actual log moves the
//! partner's last period start.

mod errors;
mod forecast;
mod log;

pub use errors::PeriodLogError;
pub use forecast::{
    forecast_periods, recorded_cycle_length, RECORDED_CYCLE_MAX, RECORDED_CYCLE_MIN,
};
pub use log::{FlowIntensity, PeriodLog, PeriodLogUpdate, MAX_NOTES_LENGTH};
