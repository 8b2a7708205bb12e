//! ListDailyLogRangeHandler - Query handler for daily logs between two dates.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::daily_log::{DailyLog, DailyLogError};
use crate::domain::foundation::UserId;
use crate::ports::{DailyLogRepository, PartnerRepository};

/// Query for daily logs with `start <= log_date <= end`, oldest first.
#[derive(Debug, Clone)]
pub struct ListDailyLogRangeQuery {
    pub user_id: UserId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct ListDailyLogRangeHandler {
    partners: Arc<dyn PartnerRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
}

impl ListDailyLogRangeHandler {
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
        query: ListDailyLogRangeQuery,
    ) -> Result<Vec<DailyLog>, DailyLogError> {
        if query.start > query.end {
            return Err(DailyLogError::InvalidRange {
                start: query.start,
                end: query.end,
            });
        }

        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| DailyLogError::partner_not_found(query.user_id.clone()))?;

        Ok(self
            .daily_logs
            .list_range(partner.id(), query.start, query.end)
            .await?)
    }
}
