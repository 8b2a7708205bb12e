//! Month view combining recorded periods, forecasts and daily check-ins.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::partner_config::PartnerConfig;
use super::phase::{phase_of, CyclePhase};
use super::resolver::cycle_day_for;
use crate::domain::daily_log::{DailyLog, Mood};
use crate::domain::foundation::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
use crate::domain::period_log::PeriodLog;

/// First and last date of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl MonthSpan {
    /// `None` when `month` is outside 1-12 or the year is outside the
    /// supported window.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
            return None;
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1)?, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
        Some(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day;
        self.first_day.iter_days().take_while(move |d| *d <= last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub cycle_day: Option<i32>,
    pub phase: CyclePhase,
    pub is_period: bool,
    pub is_predicted_period: bool,
    pub has_daily_log: bool,
    pub mood: Option<Mood>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

/// Builds the day-by-day view of `span`.
///
/// `period_logs` may mix actual and predicted entries; actual days win
/// over predicted ones on the same date. Forward projections from
/// `last_period_start` fill in months beyond the stored forecasts; only
/// occurrences starting inside `span` are drawn.
pub fn build_calendar(
    config: &PartnerConfig,
    span: MonthSpan,
    period_logs: &[PeriodLog],
    daily_logs: &[DailyLog],
) -> CalendarMonth {
    let period_length = config.period_length();
    let cycle_length = config.cycle_length();

    let mut period_dates = BTreeSet::new();
    let mut predicted_dates = BTreeSet::new();
    for log in period_logs {
        let target = if log.is_predicted() {
            &mut predicted_dates
        } else {
            &mut period_dates
        };
        target.extend(log.covered_dates(period_length).filter(|d| span.contains(*d)));
    }

    if let Some(last_start) = config.last_period_start() {
        let step = Duration::days(i64::from(cycle_length));
        let mut next = last_start.checked_add_signed(step);
        while let Some(occurrence) = next.filter(|d| *d <= span.last_day()) {
            if occurrence >= span.first_day() {
                predicted_dates.extend(
                    occurrence
                        .iter_days()
                        .take(usize::try_from(period_length).unwrap_or(0))
                        .filter(|d| span.contains(*d)),
                );
            }
            next = occurrence.checked_add_signed(step);
        }
    }

    let moods: HashMap<NaiveDate, Option<Mood>> = daily_logs
        .iter()
        .filter(|log| span.contains(log.log_date()))
        .map(|log| (log.log_date(), log.mood()))
        .collect();

    let days = span
        .days()
        .map(|date| {
            let cycle_day = config
                .last_period_start()
                .and_then(|start| cycle_day_for(start, cycle_length, date));
            let phase = cycle_day
                .map(|day| phase_of(day, cycle_length))
                .unwrap_or(CyclePhase::Unknown);
            let is_period = period_dates.contains(&date);
            let daily = moods.get(&date);

            CalendarDay {
                date,
                cycle_day,
                phase,
                is_period,
                is_predicted_period: !is_period && predicted_dates.contains(&date),
                has_daily_log: daily.is_some(),
                mood: daily.copied().flatten(),
            }
        })
        .collect();

    CalendarMonth {
        year: span.year(),
        month: span.month(),
        days,
    }
}
