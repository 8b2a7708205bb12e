//! Cycle phase classification.
//!
//! The cycle is split into four phases anchored on two fixed offsets:
//! menstruation always covers days 1-5, and ovulation is assumed to fall
//! 14 days before the end of the cycle with a two-day window either side.
//!
//! ```text
//! day:  1 ..... 5 | 6 ........ F | F+1 ...... O+2 | O+3 ...... L
//!       MENSTRUAL | FOLLICULAR   | OVULATION      | LUTEAL
//!
//! O = L - 14 (ovulation day), F = O - 2 (follicular end)
//! ```
//!
//! For a 21-day cycle `F = 5`, so the follicular range `[6, 5]` is empty and
//! days 6-9 are ovulation. That overlap with the menstrual boundary is kept
//! as-is rather than shifted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days 1..=MENSTRUAL_DAYS are always menstrual.
pub const MENSTRUAL_DAYS: i32 = 5;

/// Distance from ovulation to the end of the cycle.
pub const LUTEAL_SPAN: i32 = 14;

/// Half-width of the ovulation window around the ovulation day.
pub const OVULATION_WINDOW: i32 = 2;

/// Phase of the menstrual cycle.
///
/// Variant order is the canonical display order and is also used as the
/// ordering of phase-keyed maps in pattern reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    Unknown,
}

impl CyclePhase {
    /// The four real phases in cycle order.
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstrual,
        CyclePhase::Follicular,
        CyclePhase::Ovulation,
        CyclePhase::Luteal,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "menstrual",
            CyclePhase::Follicular => "follicular",
            CyclePhase::Ovulation => "ovulation",
            CyclePhase::Luteal => "luteal",
            CyclePhase::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day boundaries of each phase for one cycle length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBoundaries {
    pub cycle_length: i32,
    pub ovulation_day: i32,
    pub follicular_end: i32,
    pub ovulation_end: i32,
}

impl PhaseBoundaries {
    pub fn for_cycle_length(cycle_length: i32) -> Self {
        let ovulation_day = cycle_length - LUTEAL_SPAN;
        Self {
            cycle_length,
            ovulation_day,
            follicular_end: ovulation_day - OVULATION_WINDOW,
            ovulation_end: ovulation_day + OVULATION_WINDOW,
        }
    }

    /// Classifies a 1-indexed cycle day.
    pub fn classify(&self, cycle_day: i32) -> CyclePhase {
        if cycle_day <= 0 || cycle_day > self.cycle_length {
            return CyclePhase::Unknown;
        }
        if cycle_day <= MENSTRUAL_DAYS {
            CyclePhase::Menstrual
        } else if cycle_day <= self.follicular_end {
            CyclePhase::Follicular
        } else if cycle_day <= self.ovulation_end {
            CyclePhase::Ovulation
        } else {
            CyclePhase::Luteal
        }
    }

    /// 1-indexed day within the phase that `cycle_day` falls in.
    pub fn phase_day(&self, cycle_day: i32) -> i32 {
        match self.classify(cycle_day) {
            CyclePhase::Menstrual => cycle_day,
            CyclePhase::Follicular => cycle_day - MENSTRUAL_DAYS,
            CyclePhase::Ovulation => cycle_day - self.follicular_end,
            CyclePhase::Luteal => cycle_day - self.ovulation_end,
            CyclePhase::Unknown => 1,
        }
    }

    /// Nominal `(start_day, end_day)` of a phase.
    ///
    /// The follicular range is empty (`end < start`) for 21-day cycles.
    /// Returns `None` for `Unknown`.
    pub fn span(&self, phase: CyclePhase) -> Option<(i32, i32)> {
        match phase {
            CyclePhase::Menstrual => Some((1, MENSTRUAL_DAYS)),
            CyclePhase::Follicular => Some((MENSTRUAL_DAYS + 1, self.follicular_end)),
            CyclePhase::Ovulation => Some((self.follicular_end + 1, self.ovulation_end)),
            CyclePhase::Luteal => Some((self.ovulation_end + 1, self.cycle_length)),
            CyclePhase::Unknown => None,
        }
    }
}

/// Phase for a cycle day under the given cycle length.
pub fn phase_of(cycle_day: i32, cycle_length: i32) -> CyclePhase {
    PhaseBoundaries::for_cycle_length(cycle_length).classify(cycle_day)
}

/// Day offset within the phase, counting from 1.
pub fn phase_day_of(cycle_day: i32, cycle_length: i32) -> i32 {
    PhaseBoundaries::for_cycle_length(cycle_length).phase_day(cycle_day)
}
