//! ListDailyLogsHandler - Query handler for a page of daily logs.

use std::sync::Arc;

use crate::domain::daily_log::{DailyLog, DailyLogError};
use crate::domain::foundation::UserId;
use crate::ports::{DailyLogRepository, ListOptions, PartnerRepository};

/// Query for a page of daily logs, newest date first.
#[derive(Debug, Clone)]
pub struct ListDailyLogsQuery {
    pub user_id: UserId,
    pub options: ListOptions,
}

/// Handler for listing daily logs.
pub struct ListDailyLogsHandler {
    partners: Arc<dyn PartnerRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
}

impl ListDailyLogsHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        daily_logs: Arc<dyn DailyLogRepository>,
    ) -> Self {
        Self {
            partners,
            daily_logs,
        }
    }

    pub async fn handle(&self, query: ListDailyLogsQuery) -> Result<Vec<DailyLog>, DailyLogError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| DailyLogError::partner_not_found(query.user_id.clone()))?;

        Ok(self
            .daily_logs
            .list_by_partner(partner.id(), &query.options)
            .await?)
    }
}
