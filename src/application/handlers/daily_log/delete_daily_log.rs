//! DeleteDailyLogHandler - Command handler for removing a day's check-in.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::daily_log::DailyLogError;
use crate::domain::foundation::{CommandMetadata, UserId};
use crate::ports::{DailyLogRepository, PartnerRepository};

#[derive(Debug, Clone)]
pub struct DeleteDailyLogCommand {
    pub user_id: UserId,
    pub log_date: NaiveDate,
}

pub struct DeleteDailyLogHandler {
    partners: Arc<dyn PartnerRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
}

impl DeleteDailyLogHandler {
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
        cmd: DeleteDailyLogCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DailyLogError> {
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DailyLogError::partner_not_found(cmd.user_id.clone()))?;

        let log = self
            .daily_logs
            .find_by_date(partner.id(), cmd.log_date)
            .await?
            .ok_or_else(|| DailyLogError::not_found(cmd.log_date))?;

        self.daily_logs.delete(log.id()).await?;

        tracing::info!(
            partner_id = %partner.id(),
            log_date = %cmd.log_date,
            correlation_id = %metadata.correlation_id(),
            "Daily log deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user};
    use crate::domain::daily_log::{DailyLog, DailyLogUpdate};

    #[tokio::test]
    async fn deletes_log_for_date() {
        let store = InMemoryStore::new();
        let partner = seed_partner(&store, &user("user-1"), None).await;
        let log = DailyLog::new(*partner.id(), date(2025, 1, 3), DailyLogUpdate::default()).unwrap();
        DailyLogRepository::save(&store, &log).await.unwrap();
        let handler = DeleteDailyLogHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));
        let cmd = DeleteDailyLogCommand {
            user_id: user("user-1"),
            log_date: date(2025, 1, 3),
        };

        handler
            .handle(cmd.clone(), CommandMetadata::test_fixture())
            .await
            .unwrap();
        assert_eq!(store.daily_log_count().await, 0);

        let again = handler.handle(cmd, CommandMetadata::test_fixture()).await;
        assert!(matches!(again, Err(DailyLogError::NotFound(_))));
    }
}
