//! HTTP DTOs for cycle endpoints.
//!
//! Responses serialize the engine's views (`CycleStatus`, `PhaseInfo`,
//! `CalendarMonth`, `CyclePattern`) directly.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Query parameters for the calendar. Missing parts fall back to `today`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl CalendarParams {
    pub fn resolve(&self, today: NaiveDate) -> (i32, u32) {
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}
