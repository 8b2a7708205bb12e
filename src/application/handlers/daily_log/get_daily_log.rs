//! GetDailyLogHandler - Query handler for the log of one date.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::daily_log::{DailyLog, DailyLogError};
use crate::domain::foundation::UserId;
use crate::ports::{DailyLogRepository, PartnerRepository};

#[derive(Debug, Clone)]
pub struct GetDailyLogQuery {
    pub user_id: UserId,
    pub log_date: NaiveDate,
}

pub struct GetDailyLogHandler {
    partners: Arc<dyn PartnerRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
}

impl GetDailyLogHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        daily_logs: Arc<dyn DailyLogRepository>,
    ) -> Self {
        Self {
            partners,
            daily_logs,
        }
    }

    pub async fn handle(&self, query: GetDailyLogQuery) -> Result<DailyLog, DailyLogError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| DailyLogError::partner_not_found(query.user_id.clone()))?;

        self.daily_logs
            .find_by_date(partner.id(), query.log_date)
            .await?
            .ok_or_else(|| DailyLogError::not_found(query.log_date))
    }
}
