//! UpdatePartnerHandler - Command handler for partial profile updates.
//!
//! Changing the cycle length, period length or anchor date invalidates the
//! stored forecasts, so they are regenerated from the new settings.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId};
use crate::domain::partner::{Partner, PartnerError, PartnerUpdate};
use crate::domain::period_log::forecast_periods;
use crate::ports::{ForecastRefresh, PartnerRepository};

/// Command to update the user's partner profile.
#[derive(Debug, Clone)]
pub struct UpdatePartnerCommand {
    pub user_id: UserId,
    pub update: PartnerUpdate,
}

/// Handler for updating partner profiles.
pub struct UpdatePartnerHandler {
    partners: Arc<dyn PartnerRepository>,
    forecast_cycles: u32,
}

impl UpdatePartnerHandler {
    pub fn new(partners: Arc<dyn PartnerRepository>, forecast_cycles: u32) -> Self {
        Self {
            partners,
            forecast_cycles,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePartnerCommand,
        metadata: CommandMetadata,
    ) -> Result<Partner, PartnerError> {
        // 1. Load
        let mut partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| PartnerError::not_found(cmd.user_id.clone()))?;
        let previous_anchor = partner.last_period_start();

        // 2. Apply
        let change = partner.apply(cmd.update)?;

        // 3. Persist, regenerating forecasts atomically when cycle settings moved
        match (change.any(), partner.last_period_start()) {
            (true, Some(anchor)) => {
                let stale_after = previous_anchor.map_or(anchor, |prev| prev.min(anchor));
                let forecasts = forecast_periods(
                    partner.id(),
                    anchor,
                    partner.cycle_length(),
                    partner.period_length(),
                    self.forecast_cycles,
                );
                let outcome = self
                    .partners
                    .update_with_forecasts(&ForecastRefresh {
                        partner: partner.clone(),
                        stale_after,
                        forecasts,
                    })
                    .await?;
                tracing::debug!(
                    partner_id = %partner.id(),
                    removed = outcome.stale_predictions_removed,
                    written = outcome.forecasts_written,
                    "Forecasts regenerated"
                );
            }
            _ => self.partners.update(&partner).await?,
        }

        tracing::info!(
            partner_id = %partner.id(),
            correlation_id = %metadata.correlation_id(),
            "Partner profile updated"
        );
        Ok(partner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user};
    use crate::domain::foundation::{DomainError, PartnerId};
    use crate::domain::partner::CycleRegularity;
    use crate::ports::{ListOptions, PeriodLogRepository, RecordingOutcome};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn handler(store: &InMemoryStore) -> UpdatePartnerHandler {
        UpdatePartnerHandler::new(Arc::new(store.clone()), 3)
    }

    /// Reads and plain updates work; the forecast refresh fails as a whole.
    struct RefreshFails(InMemoryStore);

    #[async_trait]
    impl PartnerRepository for RefreshFails {
        async fn save(&self, partner: &Partner) -> Result<(), DomainError> {
            PartnerRepository::save(&self.0, partner).await
        }
        async fn update(&self, partner: &Partner) -> Result<(), DomainError> {
            PartnerRepository::update(&self.0, partner).await
        }
        async fn update_with_forecasts(
            &self,
            _refresh: &ForecastRefresh,
        ) -> Result<RecordingOutcome, DomainError> {
            Err(DomainError::database("commit transaction", "connection reset"))
        }
        async fn find_by_user_id(
            &self,
            user_id: &UserId,
        ) -> Result<Option<Partner>, DomainError> {
            self.0.find_by_user_id(user_id).await
        }
        async fn delete(&self, id: &PartnerId) -> Result<(), DomainError> {
            PartnerRepository::delete(&self.0, id).await
        }
    }

    async fn predicted_starts(store: &InMemoryStore, partner: &Partner) -> Vec<NaiveDate> {
        PeriodLogRepository::list_by_partner(store, partner.id(), &ListOptions::first(20))
            .await
            .unwrap()
            .into_iter()
            .filter(|l| l.is_predicted())
            .map(|l| l.start_date())
            .collect()
    }

    #[tokio::test]
    async fn updates_only_given_fields() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;

        let partner = handler(&store)
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate {
                        name: Some("Jordan".to_string()),
                        cycle_regularity: Some(CycleRegularity::Irregular),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(partner.name(), "Jordan");
        assert_eq!(partner.cycle_regularity(), CycleRegularity::Irregular);
        assert_eq!(partner.cycle_length(), 28);
        assert_eq!(store.period_log_count().await, 0);
    }

    #[tokio::test]
    async fn cycle_length_change_regenerates_forecasts() {
        let store = InMemoryStore::new();
        let seeded = seed_partner(&store, &user("user-1"), Some(date(2025, 1, 1))).await;
        PeriodLogRepository::save_forecasts(
            &store,
            &forecast_periods(seeded.id(), date(2025, 1, 1), 28, 5, 3),
        )
        .await
        .unwrap();

        let partner = handler(&store)
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate {
                        cycle_length: Some(30),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(
            predicted_starts(&store, &partner).await,
            vec![date(2025, 4, 1), date(2025, 3, 2), date(2025, 1, 31)]
        );
    }

    #[tokio::test]
    async fn moving_anchor_later_drops_forecasts_from_old_anchor() {
        let store = InMemoryStore::new();
        let seeded = seed_partner(&store, &user("user-1"), Some(date(2025, 1, 1))).await;
        PeriodLogRepository::save_forecasts(
            &store,
            &forecast_periods(seeded.id(), date(2025, 1, 1), 28, 5, 3),
        )
        .await
        .unwrap();

        let partner = handler(&store)
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate {
                        last_period_start: Some(date(2025, 1, 10)),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(partner.last_period_start(), Some(date(2025, 1, 10)));
        assert_eq!(
            predicted_starts(&store, &partner).await,
            vec![date(2025, 4, 4), date(2025, 3, 7), date(2025, 2, 7)]
        );
    }

    #[tokio::test]
    async fn failed_forecast_refresh_leaves_settings_and_forecasts_untouched() {
        let store = InMemoryStore::new();
        let seeded = seed_partner(&store, &user("user-1"), Some(date(2025, 1, 1))).await;
        PeriodLogRepository::save_forecasts(
            &store,
            &forecast_periods(seeded.id(), date(2025, 1, 1), 28, 5, 3),
        )
        .await
        .unwrap();
        let handler = UpdatePartnerHandler::new(Arc::new(RefreshFails(store.clone())), 3);

        let result = handler
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate {
                        cycle_length: Some(30),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(PartnerError::Infrastructure(_))));
        let stored = PartnerRepository::find_by_user_id(&store, &user("user-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.cycle_length(), 28);
        assert_eq!(
            predicted_starts(&store, &stored).await,
            vec![date(2025, 3, 26), date(2025, 2, 26), date(2025, 1, 29)]
        );
    }

    #[tokio::test]
    async fn settings_without_cycle_change_skip_forecast_refresh() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), Some(date(2025, 1, 1))).await;
        let handler = UpdatePartnerHandler::new(Arc::new(RefreshFails(store.clone())), 3);

        let partner = handler
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate {
                        name: Some("Jordan".to_string()),
                        cycle_length: Some(28),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(partner.name(), "Jordan");
    }

    #[tokio::test]
    async fn invalid_update_changes_nothing() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;

        let result = handler(&store)
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate {
                        name: Some("Jordan".to_string()),
                        reminder_days_before: Some(9),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(PartnerError::ValidationFailed { .. })));
        let stored = PartnerRepository::find_by_user_id(&store, &user("user-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Sam");
    }

    #[tokio::test]
    async fn missing_partner_is_not_found() {
        let store = InMemoryStore::new();

        let result = handler(&store)
            .handle(
                UpdatePartnerCommand {
                    user_id: user("user-1"),
                    update: PartnerUpdate::default(),
                },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(PartnerError::NotFound(_))));
    }
}
