//! Daily log repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::ListOptions;
use crate::domain::daily_log::DailyLog;
use crate::domain::foundation::{DailyLogId, DomainError, PartnerId};

/// Persistence for daily check-ins, unique per `(partner, log_date)`.
#[async_trait]
pub trait DailyLogRepository: Send + Sync {
    /// Save a new daily log.
    ///
    /// # Errors
    ///
    /// - `DailyLogAlreadyExists` if the partner already has a log that day
    async fn save(&self, log: &DailyLog) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `DailyLogNotFound` if the log doesn't exist
    async fn update(&self, log: &DailyLog) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `DailyLogNotFound` if the log doesn't exist
    async fn delete(&self, id: &DailyLogId) -> Result<(), DomainError>;

    async fn find_by_date(
        &self,
        partner_id: &PartnerId,
        log_date: NaiveDate,
    ) -> Result<Option<DailyLog>, DomainError>;

    /// Newest first.
    async fn list_by_partner(
        &self,
        partner_id: &PartnerId,
        options: &ListOptions,
    ) -> Result<Vec<DailyLog>, DomainError>;

    /// Logs dated within `[start, end]`, oldest first.
    async fn list_range(
        &self,
        partner_id: &PartnerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLog>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_log_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DailyLogRepository) {}
    }
}
