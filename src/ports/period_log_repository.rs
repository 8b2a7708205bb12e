//! Period log repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::ListOptions;
use crate::domain::foundation::{DomainError, PartnerId, PeriodLogId};
use crate::domain::period_log::PeriodLog;

/// Everything written when a user confirms a new period.
///
/// Applied atomically by `PeriodLogRepository::record_actual`.
#[derive(Debug, Clone)]
pub struct PeriodRecording {
    /// The confirmed, non-predicted log.
    pub log: PeriodLog,

    /// Forecasts to write after the log; dates already holding a log are
    /// skipped.
    pub forecasts: Vec<PeriodLog>,
}

/// Row counts from a recording, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordingOutcome {
    pub stale_predictions_removed: u64,
    pub forecasts_written: u64,
}

/// Persistence for period logs.
///
/// Logs are unique per `(partner, start_date)`. Listings are ordered by
/// `start_date` descending.
#[async_trait]
pub trait PeriodLogRepository: Send + Sync {
    /// Records a confirmed period in one transaction:
    ///
    /// 1. delete predicted logs starting on or after the new start date
    /// 2. insert the new log
    /// 3. set the partner's `last_period_start` to the new start date
    /// 4. insert the forecasts
    ///
    /// # Errors
    ///
    /// - `PeriodLogAlreadyExists` if an actual log already starts that day
    /// - `PartnerNotFound` if the partner doesn't exist
    async fn record_actual(
        &self,
        recording: &PeriodRecording,
    ) -> Result<RecordingOutcome, DomainError>;

    /// Inserts forecasts, skipping dates that already hold a log.
    ///
    /// Returns the number of rows written.
    async fn save_forecasts(&self, forecasts: &[PeriodLog]) -> Result<u64, DomainError>;

    /// Update the editable fields of an existing log.
    ///
    /// # Errors
    ///
    /// - `PeriodLogNotFound` if the log doesn't exist
    async fn update(&self, log: &PeriodLog) -> Result<(), DomainError>;

    /// Delete a log.
    ///
    /// # Errors
    ///
    /// - `PeriodLogNotFound` if the log doesn't exist
    async fn delete(&self, id: &PeriodLogId) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PeriodLogId) -> Result<Option<PeriodLog>, DomainError>;

    /// The log (actual or predicted) starting on `start_date`, if any.
    async fn find_by_start_date(
        &self,
        partner_id: &PartnerId,
        start_date: NaiveDate,
    ) -> Result<Option<PeriodLog>, DomainError>;

    /// Actual and predicted logs, newest first.
    async fn list_by_partner(
        &self,
        partner_id: &PartnerId,
        options: &ListOptions,
    ) -> Result<Vec<PeriodLog>, DomainError>;

    /// The `limit` most recent actual logs, newest first.
    async fn list_actual(
        &self,
        partner_id: &PartnerId,
        limit: u32,
    ) -> Result<Vec<PeriodLog>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_log_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PeriodLogRepository) {}
    }
}
