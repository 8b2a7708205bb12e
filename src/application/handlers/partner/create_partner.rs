//! CreatePartnerHandler - Command handler for setting up the partner profile.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ErrorCode, PartnerId, UserId};
use crate::domain::partner::{Partner, PartnerError, PartnerUpdate};
use crate::domain::period_log::forecast_periods;
use crate::ports::{PartnerRepository, PeriodLogRepository};

/// Command to create the user's partner profile.
#[derive(Debug, Clone)]
pub struct CreatePartnerCommand {
    pub user_id: UserId,
    pub name: String,
    /// Optional initial settings; omitted fields take their defaults.
    pub settings: PartnerUpdate,
}

/// Handler for creating partner profiles.
pub struct CreatePartnerHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
    forecast_cycles: u32,
}

impl CreatePartnerHandler {
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
        cmd: CreatePartnerCommand,
        metadata: CommandMetadata,
    ) -> Result<Partner, PartnerError> {
        // 1. One partner per user
        if self.partners.find_by_user_id(&cmd.user_id).await?.is_some() {
            return Err(PartnerError::already_exists(cmd.user_id));
        }

        // 2. Build and persist
        let partner = Partner::new(PartnerId::new(), cmd.user_id.clone(), cmd.name, cmd.settings)?;
        self.partners.save(&partner).await.map_err(|e| {
            if e.code == ErrorCode::PartnerAlreadyExists {
                PartnerError::already_exists(cmd.user_id.clone())
            } else {
                e.into()
            }
        })?;

        // 3. Seed forecasts from a known anchor
        if let Some(start) = partner.last_period_start() {
            let forecasts = forecast_periods(
                partner.id(),
                start,
                partner.cycle_length(),
                partner.period_length(),
                self.forecast_cycles,
            );
            self.period_logs.save_forecasts(&forecasts).await?;
        }

        tracing::info!(
            partner_id = %partner.id(),
            correlation_id = %metadata.correlation_id(),
            "Partner profile created"
        );
        Ok(partner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user, FailingStore};
    use crate::ports::ListOptions;

    fn handler(store: &InMemoryStore) -> CreatePartnerHandler {
        CreatePartnerHandler::new(Arc::new(store.clone()), Arc::new(store.clone()), 3)
    }

    fn command(user_id: &str, settings: PartnerUpdate) -> CreatePartnerCommand {
        CreatePartnerCommand {
            user_id: user(user_id),
            name: "Alex".to_string(),
            settings,
        }
    }

    #[tokio::test]
    async fn creates_partner_with_defaults() {
        let store = InMemoryStore::new();

        let partner = handler(&store)
            .handle(command("user-1", PartnerUpdate::default()), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(partner.name(), "Alex");
        assert_eq!(partner.cycle_length(), 28);
        assert_eq!(partner.period_length(), 5);
        assert_eq!(partner.last_period_start(), None);
        assert_eq!(store.period_log_count().await, 0);
    }

    #[tokio::test]
    async fn known_last_period_seeds_forecasts() {
        let store = InMemoryStore::new();
        let settings = PartnerUpdate {
            cycle_length: Some(30),
            last_period_start: Some(date(2025, 1, 1)),
            ..Default::default()
        };

        let partner = handler(&store)
            .handle(command("user-1", settings), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let logs = PeriodLogRepository::list_by_partner(&store, partner.id(), &ListOptions::first(10))
            .await
            .unwrap();
        let starts: Vec<_> = logs.iter().map(|l| l.start_date()).collect();
        assert_eq!(
            starts,
            vec![date(2025, 4, 1), date(2025, 3, 2), date(2025, 1, 31)]
        );
        assert!(logs.iter().all(|l| l.is_predicted()));
    }

    #[tokio::test]
    async fn second_profile_for_same_user_conflicts() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;

        let result = handler(&store)
            .handle(command("user-1", PartnerUpdate::default()), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(PartnerError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn invalid_cycle_length_is_rejected() {
        let store = InMemoryStore::new();
        let settings = PartnerUpdate {
            cycle_length: Some(40),
            ..Default::default()
        };

        let result = handler(&store)
            .handle(command("user-1", settings), CommandMetadata::test_fixture())
            .await;

        match result {
            Err(PartnerError::ValidationFailed { field, .. }) => assert_eq!(field, "cycle_length"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure() {
        let handler = CreatePartnerHandler::new(Arc::new(FailingStore), Arc::new(FailingStore), 3);

        let result = handler
            .handle(command("user-1", PartnerUpdate::default()), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(PartnerError::Infrastructure(_))));
    }
}
