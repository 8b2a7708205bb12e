//! ListPeriodLogsHandler - Query handler for a page of period logs.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::period_log::{PeriodLog, PeriodLogError};
use crate::ports::{ListOptions, PartnerRepository, PeriodLogRepository};

/// Query for a page of the partner's period logs, newest start first.
#[derive(Debug, Clone)]
pub struct ListPeriodLogsQuery {
    pub user_id: UserId,
    pub options: ListOptions,
}

/// Handler for listing period logs.
pub struct ListPeriodLogsHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
}

impl ListPeriodLogsHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        period_logs: Arc<dyn PeriodLogRepository>,
    ) -> Self {
        Self {
            partners,
            period_logs,
        }
    }

    pub async fn handle(&self, query: ListPeriodLogsQuery) -> Result<Vec<PeriodLog>, PeriodLogError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| PeriodLogError::partner_not_found(query.user_id.clone()))?;

        let logs = self
            .period_logs
            .list_by_partner(partner.id(), &query.options)
            .await?;
        tracing::debug!(partner_id = %partner.id(), count = logs.len(), "Listed period logs");
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user};
    use crate::domain::period_log::forecast_periods;

    #[tokio::test]
    async fn pages_newest_first() {
        let store = InMemoryStore::new();
        let partner = seed_partner(&store, &user("user-1"), Some(date(2025, 1, 1))).await;
        PeriodLogRepository::save_forecasts(
            &store,
            &forecast_periods(partner.id(), date(2025, 1, 1), 28, 5, 4),
        )
        .await
        .unwrap();
        let handler = ListPeriodLogsHandler::new(Arc::new(store.clone()), Arc::new(store));

        let logs = handler
            .handle(ListPeriodLogsQuery {
                user_id: user("user-1"),
                options: ListOptions::new(1, 2).unwrap(),
            })
            .await
            .unwrap();

        let starts: Vec<_> = logs.iter().map(|l| l.start_date()).collect();
        assert_eq!(starts, vec![date(2025, 3, 26), date(2025, 2, 26)]);
    }

    #[tokio::test]
    async fn missing_partner_is_not_found() {
        let store = InMemoryStore::new();
        let handler = ListPeriodLogsHandler::new(Arc::new(store.clone()), Arc::new(store));

        let result = handler
            .handle(ListPeriodLogsQuery {
                user_id: user("user-1"),
                options: ListOptions::first(20),
            })
            .await;

        assert!(matches!(result, Err(PeriodLogError::PartnerNotFound(_))));
    }
}
