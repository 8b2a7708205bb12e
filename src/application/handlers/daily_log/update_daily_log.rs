//! UpdateDailyLogHandler - Command handler for editing a day's check-in.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::daily_log::{DailyLog, DailyLogError, DailyLogUpdate};
use crate::domain::foundation::{CommandMetadata, UserId};
use crate::ports::{DailyLogRepository, PartnerRepository};

/// Command to partially update the log for `log_date`.
#[derive(Debug, Clone)]
pub struct UpdateDailyLogCommand {
    pub user_id: UserId,
    pub log_date: NaiveDate,
    pub update: DailyLogUpdate,
}

pub struct UpdateDailyLogHandler {
    partners: Arc<dyn PartnerRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
}

impl UpdateDailyLogHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        daily_logs: Arc<dyn DailyLogRepository>,
    ) -> Self {
        Self {
            partners,
            daily_logs,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateDailyLogCommand,
        metadata: CommandMetadata,
    ) -> Result<DailyLog, DailyLogError> {
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DailyLogError::partner_not_found(cmd.user_id.clone()))?;

        let mut log = self
            .daily_logs
            .find_by_date(partner.id(), cmd.log_date)
            .await?
            .ok_or_else(|| DailyLogError::not_found(cmd.log_date))?;

        log.apply(cmd.update)?;
        self.daily_logs.update(&log).await?;

        tracing::info!(
            partner_id = %partner.id(),
            log_date = %cmd.log_date,
            correlation_id = %metadata.correlation_id(),
            "Daily log updated"
        );
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user};
    use crate::domain::daily_log::Mood;

    #[tokio::test]
    async fn replaces_symptoms_and_keeps_other_fields() {
        let store = InMemoryStore::new();
        let partner = seed_partner(&store, &user("user-1"), None).await;
        let log = DailyLog::new(
            *partner.id(),
            date(2025, 1, 3),
            DailyLogUpdate {
                mood: Some(Mood::Meh),
                energy_level: Some(3),
                symptoms: Some(vec!["headache".to_string()]),
                notes: None,
            },
        )
        .unwrap();
        DailyLogRepository::save(&store, &log).await.unwrap();
        let handler = UpdateDailyLogHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));

        let updated = handler
            .handle(
                UpdateDailyLogCommand {
                    user_id: user("user-1"),
                    log_date: date(2025, 1, 3),
                    update: DailyLogUpdate {
                        symptoms: Some(vec!["bloating".to_string()]),
                        ..Default::default()
                    },
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(updated.mood(), Some(Mood::Meh));
        assert_eq!(updated.energy_level(), Some(3));
        assert_eq!(updated.symptoms(), &["bloating".to_string()]);
    }

    #[tokio::test]
    async fn missing_date_is_not_found() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;
        let handler = UpdateDailyLogHandler::new(Arc::new(store.clone()), Arc::new(store));

        let result = handler
            .handle(
                UpdateDailyLogCommand {
                    user_id: user("user-1"),
                    log_date: date(2025, 1, 3),
                    update: DailyLogUpdate::default(),
                },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(DailyLogError::NotFound(_))));
    }
}
