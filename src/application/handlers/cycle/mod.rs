//! Cycle query handlers.
//!
//! Read-only views computed by the cycle engine from the partner profile
//! and stored logs.

mod get_calendar_month;
mod get_current_status;
mod get_cycle_patterns;
mod get_phase_table;

pub use get_calendar_month::{GetCalendarMonthHandler, GetCalendarMonthQuery};
pub use get_current_status::{GetCurrentStatusHandler, GetCurrentStatusQuery};
pub use get_cycle_patterns::{GetCyclePatternsHandler, GetCyclePatternsQuery};
pub use get_phase_table::{GetPhaseTableHandler, GetPhaseTableQuery};
