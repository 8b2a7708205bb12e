//! Cycle engine.
//!
//! Pure calendar arithmetic over a partner's configuration and log history:
//!
//! - `phase` classifies a cycle day into a phase
//! - `resolver` maps dates to cycle days
//! - `predictor` projects the next period and builds the current status
//! - `phases` lists the phase table with tips
//! - `calendar` renders one month
//! - `patterns` mines history for averages and per-phase trends
//!
//! Nothing here touches storage; handlers load the inputs and call in.

mod calendar;
mod errors;
mod partner_config;
mod patterns;
mod phase;
mod phases;
mod predictor;
mod resolver;
mod tips;

pub use calendar::{build_calendar, CalendarDay, CalendarMonth, MonthSpan};
pub use errors::CycleError;
pub use partner_config::{
    PartnerConfig, CYCLE_LENGTH_MAX, CYCLE_LENGTH_MIN, DEFAULT_CYCLE_LENGTH,
    DEFAULT_PERIOD_LENGTH, PERIOD_LENGTH_MAX, PERIOD_LENGTH_MIN,
};
pub use patterns::{analyze_patterns, CyclePattern, MAX_SYMPTOMS_PER_PHASE};
pub use phase::{phase_day_of, phase_of, CyclePhase, PhaseBoundaries};
pub use phases::{phase_table, PhaseInfo};
pub use predictor::{predict_next_period, CycleStatus};
pub use resolver::{cycle_day_for, days_since, phase_for};
pub use tips::{tips_for, RandomTipSource, TipSource};
