//! Phase table for a cycle length.

use serde::Serialize;

use super::phase::{CyclePhase, PhaseBoundaries};
use super::tips::TipSource;

/// One row of the phase table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseInfo {
    pub phase: CyclePhase,
    pub start_day: i32,
    pub end_day: i32,
    pub tip: String,
}

/// The four phases of a `cycle_length`-day cycle in order, each with a tip.
///
/// The follicular row of a 21-day cycle has `end_day < start_day`.
pub fn phase_table(cycle_length: i32, tips: &dyn TipSource) -> Vec<PhaseInfo> {
    let boundaries = PhaseBoundaries::for_cycle_length(cycle_length);
    CyclePhase::ALL
        .iter()
        .filter_map(|phase| {
            boundaries.span(*phase).map(|(start_day, end_day)| PhaseInfo {
                phase: *phase,
                start_day,
                end_day,
                tip: tips.tip_for(*phase).to_string(),
            })
        })
        .collect()
}
