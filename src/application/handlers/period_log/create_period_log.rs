//! CreatePeriodLogHandler - Command handler for logging a period start.
//!
//! Recording an actual period measures the cycle that just ended, replaces
//! stale predictions, moves the partner's anchor date and writes fresh
//! forecasts. The store applies all of it in one transaction.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{CommandMetadata, ErrorCode, UserId};
use crate::domain::period_log::{
    forecast_periods, recorded_cycle_length, FlowIntensity, PeriodLog, PeriodLogError,
};
use crate::ports::{PartnerRepository, PeriodLogRepository, PeriodRecording};

/// Command to log an actual period.
#[derive(Debug, Clone)]
pub struct CreatePeriodLogCommand {
    pub user_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub flow_intensity: Option<FlowIntensity>,
    pub notes: Option<String>,
}

/// Handler for logging periods.
pub struct CreatePeriodLogHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
    forecast_cycles: u32,
}

impl CreatePeriodLogHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        period_logs: Arc<dyn PeriodLogRepository>,
        forecast_cycles: u32,
    ) -> Self {
        Self {
            partners,
            period_logs,
            forecast_cycles,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePeriodLogCommand,
        metadata: CommandMetadata,
    ) -> Result<PeriodLog, PeriodLogError> {
        // 1. Resolve partner
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| PeriodLogError::partner_not_found(cmd.user_id.clone()))?;

        // 2. An actual log on this date is a conflict; a forecast is replaced
        if let Some(existing) = self
            .period_logs
            .find_by_start_date(partner.id(), cmd.start_date)
            .await?
        {
            if !existing.is_predicted() {
                return Err(PeriodLogError::already_exists(cmd.start_date));
            }
        }

        // 3. Measure the cycle that ended at this start
        let previous = self.period_logs.list_actual(partner.id(), 1).await?;
        let cycle_length = previous
            .first()
            .and_then(|prev| recorded_cycle_length(prev.start_date(), cmd.start_date));

        // 4. Build log and forecasts
        let log = PeriodLog::actual(
            *partner.id(),
            cmd.start_date,
            cmd.end_date,
            cmd.flow_intensity,
            cmd.notes,
            cycle_length,
        )?;
        let forecasts = forecast_periods(
            partner.id(),
            cmd.start_date,
            partner.cycle_length(),
            partner.period_length(),
            self.forecast_cycles,
        );

        // 5. Record atomically
        let recording = PeriodRecording { log, forecasts };
        let outcome = self
            .period_logs
            .record_actual(&recording)
            .await
            .map_err(|e| match e.code {
                ErrorCode::PeriodLogAlreadyExists => PeriodLogError::already_exists(cmd.start_date),
                ErrorCode::PartnerNotFound => PeriodLogError::partner_not_found(cmd.user_id.clone()),
                _ => e.into(),
            })?;

        tracing::info!(
            partner_id = %partner.id(),
            period_log_id = %recording.log.id(),
            start_date = %cmd.start_date,
            cycle_length = ?cycle_length,
            stale_predictions_removed = outcome.stale_predictions_removed,
            forecasts_written = outcome.forecasts_written,
            correlation_id = %metadata.correlation_id(),
            "Period logged"
        );
        Ok(recording.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user, FailingStore};
    use crate::domain::partner::Partner;
    use crate::ports::ListOptions;

    fn handler(store: &InMemoryStore) -> CreatePeriodLogHandler {
        CreatePeriodLogHandler::new(Arc::new(store.clone()), Arc::new(store.clone()), 3)
    }

    fn command(start_date: NaiveDate) -> CreatePeriodLogCommand {
        CreatePeriodLogCommand {
            user_id: user("user-1"),
            start_date,
            end_date: None,
            flow_intensity: Some(FlowIntensity::Medium),
            notes: None,
        }
    }

    async fn all_logs(store: &InMemoryStore, partner: &Partner) -> Vec<PeriodLog> {
        PeriodLogRepository::list_by_partner(store, partner.id(), &ListOptions::first(50))
            .await
            .unwrap()
    }

    async fn stored_partner(store: &InMemoryStore) -> Partner {
        PartnerRepository::find_by_user_id(store, &user("user-1"))
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn first_log_has_no_cycle_length_and_moves_anchor() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;

        let log = handler(&store)
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert!(!log.is_predicted());
        assert_eq!(log.cycle_length(), None);
        assert_eq!(log.flow_intensity(), Some(FlowIntensity::Medium));
        assert_eq!(
            stored_partner(&store).await.last_period_start(),
            Some(date(2025, 1, 1))
        );
    }

    #[tokio::test]
    async fn twenty_eight_day_gap_records_cycle_length() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;
        let handler = handler(&store);
        handler
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let log = handler
            .handle(command(date(2025, 1, 29)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(log.cycle_length(), Some(28));
    }

    #[tokio::test]
    async fn fifty_day_gap_leaves_cycle_length_unset() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;
        let handler = handler(&store);
        handler
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let log = handler
            .handle(command(date(2025, 2, 20)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(log.cycle_length(), None);
    }

    #[tokio::test]
    async fn new_log_replaces_later_forecasts() {
        let store = InMemoryStore::new();
        let partner = seed_partner(&store, &user("user-1"), None).await;
        let handler = handler(&store);
        handler
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        // Logged on the first forecast date, which it replaces.
        handler
            .handle(command(date(2025, 1, 29)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let logs = all_logs(&store, &partner).await;
        let actual: Vec<_> = logs
            .iter()
            .filter(|l| !l.is_predicted())
            .map(|l| l.start_date())
            .collect();
        let predicted: Vec<_> = logs
            .iter()
            .filter(|l| l.is_predicted())
            .map(|l| l.start_date())
            .collect();
        assert_eq!(actual, vec![date(2025, 1, 29), date(2025, 1, 1)]);
        assert_eq!(
            predicted,
            vec![date(2025, 4, 23), date(2025, 3, 26), date(2025, 2, 26)]
        );
        assert_eq!(
            stored_partner(&store).await.last_period_start(),
            Some(date(2025, 1, 29))
        );
    }

    #[tokio::test]
    async fn duplicate_actual_log_conflicts() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;
        let handler = handler(&store);
        handler
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let result = handler
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await;

        assert_eq!(
            result.unwrap_err(),
            PeriodLogError::already_exists(date(2025, 1, 1))
        );
    }

    #[tokio::test]
    async fn end_before_start_is_rejected() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;
        let mut cmd = command(date(2025, 1, 10));
        cmd.end_date = Some(date(2025, 1, 5));

        let result = handler(&store)
            .handle(cmd, CommandMetadata::test_fixture())
            .await;

        match result {
            Err(PeriodLogError::ValidationFailed { field, .. }) => assert_eq!(field, "end_date"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(store.period_log_count().await, 0);
    }

    #[tokio::test]
    async fn missing_partner_is_not_found() {
        let result = handler(&InMemoryStore::new())
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(PeriodLogError::PartnerNotFound(_))));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure() {
        let handler = CreatePeriodLogHandler::new(Arc::new(FailingStore), Arc::new(FailingStore), 3);

        let result = handler
            .handle(command(date(2025, 1, 1)), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(PeriodLogError::Infrastructure(_))));
    }
}
