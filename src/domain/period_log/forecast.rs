//! Cycle-length measurement and forward forecasts.

use chrono::{Duration, NaiveDate};

use super::log::PeriodLog;
use crate::domain::foundation::PartnerId;

/// Shortest gap between period starts accepted as a real cycle.
pub const RECORDED_CYCLE_MIN: i64 = 21;

/// Longest gap between period starts accepted as a real cycle.
///
/// Anything longer is treated as a missed log rather than a cycle.
pub const RECORDED_CYCLE_MAX: i64 = 45;

/// Length of the cycle that ended when a new period started at `start_date`.
pub fn recorded_cycle_length(previous_start: NaiveDate, start_date: NaiveDate) -> Option<i32> {
    let days = (start_date - previous_start).num_days();
    if (RECORDED_CYCLE_MIN..=RECORDED_CYCLE_MAX).contains(&days) {
        i32::try_from(days).ok()
    } else {
        None
    }
}

/// Predicted periods at `start + k * cycle_length` for `k = 1..=cycles`.
pub fn forecast_periods(
    partner_id: &PartnerId,
    start_date: NaiveDate,
    cycle_length: i32,
    period_length: i32,
    cycles: u32,
) -> Vec<PeriodLog> {
    (1..=i64::from(cycles))
        .map(|k| {
            let start = start_date + Duration::days(k * i64::from(cycle_length));
            PeriodLog::predicted(*partner_id, start, period_length)
        })
        .collect()
}
