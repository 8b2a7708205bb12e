//! Period log entity.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{PartnerId, PeriodLogId, Timestamp, ValidationError};

/// Maximum length of free-text notes.
pub const MAX_NOTES_LENGTH: usize = 500;

/// Reported flow strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowIntensity {
    Light,
    Medium,
    Heavy,
}

impl FlowIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowIntensity::Light => "light",
            FlowIntensity::Medium => "medium",
            FlowIntensity::Heavy => "heavy",
        }
    }
}

impl fmt::Display for FlowIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowIntensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(FlowIntensity::Light),
            "medium" => Ok(FlowIntensity::Medium),
            "heavy" => Ok(FlowIntensity::Heavy),
            other => Err(ValidationError::invalid_format(
                "flow_intensity",
                format!("unknown flow intensity '{}'", other),
            )),
        }
    }
}

/// Fields a user may change on an existing log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodLogUpdate {
    pub end_date: Option<NaiveDate>,
    pub flow_intensity: Option<FlowIntensity>,
    pub notes: Option<String>,
}

/// A recorded or forecast period.
///
/// # Invariants
///
/// - `end_date`, when set, is not before `start_date`
/// - predicted logs are never user-confirmed and carry no cycle length
/// - `notes` is at most 500 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLog {
    id: PeriodLogId,
    partner_id: PartnerId,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    cycle_length: Option<i32>,
    flow_intensity: Option<FlowIntensity>,
    is_predicted: bool,
    notes: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PeriodLog {
    /// A user-confirmed period.
    ///
    /// `cycle_length` is the recorded length of the cycle that ended at
    /// `start_date`, if one could be measured.
    pub fn actual(
        partner_id: PartnerId,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        flow_intensity: Option<FlowIntensity>,
        notes: Option<String>,
        cycle_length: Option<i32>,
    ) -> Result<Self, ValidationError> {
        ValidationError::check_date("start_date", start_date)?;
        validate_end_date(start_date, end_date)?;
        ValidationError::check_length("notes", notes.as_deref(), MAX_NOTES_LENGTH)?;

        let now = Timestamp::now();
        Ok(Self {
            id: PeriodLogId::new(),
            partner_id,
            start_date,
            end_date,
            cycle_length,
            flow_intensity,
            is_predicted: false,
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// A synthetic forecast spanning `period_length` days.
    pub fn predicted(partner_id: PartnerId, start_date: NaiveDate, period_length: i32) -> Self {
        let now = Timestamp::now();
        let span = i64::from(period_length.max(1)) - 1;
        Self {
            id: PeriodLogId::new(),
            partner_id,
            start_date,
            end_date: Some(start_date + Duration::days(span)),
            cycle_length: None,
            flow_intensity: None,
            is_predicted: true,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a log from storage without validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PeriodLogId,
        partner_id: PartnerId,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        cycle_length: Option<i32>,
        flow_intensity: Option<FlowIntensity>,
        is_predicted: bool,
        notes: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            partner_id,
            start_date,
            end_date,
            cycle_length,
            flow_intensity,
            is_predicted,
            notes,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &PeriodLogId {
        &self.id
    }

    pub fn partner_id(&self) -> &PartnerId {
        &self.partner_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn cycle_length(&self) -> Option<i32> {
        self.cycle_length
    }

    pub fn flow_intensity(&self) -> Option<FlowIntensity> {
        self.flow_intensity
    }

    pub fn is_predicted(&self) -> bool {
        self.is_predicted
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Length in days when an end date is known.
    pub fn recorded_length(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.start_date).num_days() + 1)
    }

    /// Every date this period covers.
    ///
    /// Falls back to `default_length` days when no end date is recorded.
    pub fn covered_dates(&self, default_length: i32) -> impl Iterator<Item = NaiveDate> {
        let days = self
            .recorded_length()
            .unwrap_or_else(|| i64::from(default_length));
        self.start_date
            .iter_days()
            .take(usize::try_from(days).unwrap_or(0))
    }

    /// Applies a partial update, validating the result before mutating.
    pub fn apply(&mut self, update: PeriodLogUpdate) -> Result<(), ValidationError> {
        let end_date = update.end_date.or(self.end_date);
        validate_end_date(self.start_date, end_date)?;
        ValidationError::check_length("notes", update.notes.as_deref(), MAX_NOTES_LENGTH)?;

        self.end_date = end_date;
        if let Some(flow) = update.flow_intensity {
            self.flow_intensity = Some(flow);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn validate_end_date(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    if let Some(end) = end {
        ValidationError::check_date("end_date", end)?;
    }
    match end {
        Some(end) if end < start => Err(ValidationError::invalid_format(
            "end_date",
            "end_date must not be before start_date",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn actual_log_rejects_end_before_start() {
        let err = PeriodLog::actual(
            PartnerId::new(),
            date(2025, 1, 10),
            Some(date(2025, 1, 9)),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.field(), "end_date");
    }

    #[test]
    fn actual_log_rejects_long_notes() {
        let notes = "x".repeat(MAX_NOTES_LENGTH + 1);
        let err = PeriodLog::actual(
            PartnerId::new(),
            date(2025, 1, 10),
            None,
            None,
            Some(notes),
            None,
        )
        .unwrap_err();
        assert_eq!(err.field(), "notes");
    }

    #[test]
    fn actual_log_rejects_far_future_dates() {
        let far = NaiveDate::from_ymd_opt(262_142, 12, 1).unwrap();
        let err = PeriodLog::actual(PartnerId::new(), far, None, None, None, None).unwrap_err();
        assert_eq!(err.field(), "start_date");

        let err = PeriodLog::actual(
            PartnerId::new(),
            date(2025, 1, 1),
            Some(far),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.field(), "end_date");
    }

    #[test]
    fn predicted_log_spans_period_length() {
        let log = PeriodLog::predicted(PartnerId::new(), date(2025, 1, 29), 5);
        assert!(log.is_predicted());
        assert_eq!(log.end_date(), Some(date(2025, 2, 2)));
        assert_eq!(log.recorded_length(), Some(5));
        assert!(log.cycle_length().is_none());
    }

    #[test]
    fn covered_dates_uses_end_date_when_present() {
        let log = PeriodLog::actual(
            PartnerId::new(),
            date(2025, 1, 1),
            Some(date(2025, 1, 3)),
            Some(FlowIntensity::Medium),
            None,
            None,
        )
        .unwrap();
        let dates: Vec<_> = log.covered_dates(5).collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 1, 2), date(2025, 1, 3)]);
    }

    #[test]
    fn covered_dates_falls_back_to_default_length() {
        let log =
            PeriodLog::actual(PartnerId::new(), date(2025, 1, 30), None, None, None, None).unwrap();
        let dates: Vec<_> = log.covered_dates(4).collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[3], date(2025, 2, 2));
    }

    #[test]
    fn apply_updates_only_given_fields() {
        let mut log = PeriodLog::actual(
            PartnerId::new(),
            date(2025, 1, 1),
            None,
            Some(FlowIntensity::Light),
            Some("cramps".to_string()),
            None,
        )
        .unwrap();

        log.apply(PeriodLogUpdate {
            end_date: Some(date(2025, 1, 5)),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(log.end_date(), Some(date(2025, 1, 5)));
        assert_eq!(log.flow_intensity(), Some(FlowIntensity::Light));
        assert_eq!(log.notes(), Some("cramps"));
    }

    #[test]
    fn apply_rejects_invalid_end_date_without_mutating() {
        let mut log =
            PeriodLog::actual(PartnerId::new(), date(2025, 1, 10), None, None, None, None).unwrap();

        let result = log.apply(PeriodLogUpdate {
            end_date: Some(date(2025, 1, 1)),
            flow_intensity: Some(FlowIntensity::Heavy),
            notes: None,
        });

        assert!(result.is_err());
        assert!(log.end_date().is_none());
        assert!(log.flow_intensity().is_none());
    }

    #[test]
    fn flow_intensity_parses_wire_names() {
        assert_eq!("heavy".parse::<FlowIntensity>().unwrap(), FlowIntensity::Heavy);
        assert!("gushing".parse::<FlowIntensity>().is_err());
    }
}
