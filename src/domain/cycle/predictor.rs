//! Next-period prediction and the current-status snapshot.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::partner_config::PartnerConfig;
use super::phase::{CyclePhase, PhaseBoundaries};
use super::resolver::cycle_day_for;

/// First date on the lattice `last_period_start + n * cycle_length` (n >= 1)
/// that falls strictly after `from_date`.
pub fn predict_next_period(
    last_period_start: NaiveDate,
    cycle_length: i32,
    from_date: NaiveDate,
) -> NaiveDate {
    let step = i64::from(cycle_length.max(1));
    let elapsed = (from_date - last_period_start).num_days();
    let cycles = if elapsed < 0 { 1 } else { elapsed / step + 1 };
    last_period_start + Duration::days(cycles * step)
}

/// Where the partner is in their cycle on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStatus {
    pub current_day: i32,
    pub cycle_length: i32,
    pub phase: CyclePhase,
    pub phase_day: i32,
    pub days_until_period: Option<i64>,
    pub predicted_period_start: Option<NaiveDate>,
    pub last_period_start: Option<NaiveDate>,
    pub is_period_active: bool,
}

impl CycleStatus {
    /// Computes the status as of `today`.
    ///
    /// Without a recorded period start, or when `today` precedes it, the
    /// status is `Unknown` with zeroed days and no predictions.
    pub fn compute(config: &PartnerConfig, today: NaiveDate) -> Self {
        let cycle_length = config.cycle_length();
        let position = config
            .last_period_start()
            .and_then(|start| cycle_day_for(start, cycle_length, today).map(|day| (start, day)));

        let Some((start, current_day)) = position else {
            return Self {
                current_day: 0,
                cycle_length,
                phase: CyclePhase::Unknown,
                phase_day: 0,
                days_until_period: None,
                predicted_period_start: None,
                last_period_start: config.last_period_start(),
                is_period_active: false,
            };
        };

        let boundaries = PhaseBoundaries::for_cycle_length(cycle_length);
        let predicted = predict_next_period(start, cycle_length, today);

        Self {
            current_day,
            cycle_length,
            phase: boundaries.classify(current_day),
            phase_day: boundaries.phase_day(current_day),
            days_until_period: Some((predicted - today).num_days()),
            predicted_period_start: Some(predicted),
            last_period_start: Some(start),
            is_period_active: current_day <= config.period_length(),
        }
    }
}
