//! GetPeriodLogHandler - Query handler for a single period log.

use std::sync::Arc;

use crate::domain::foundation::{PeriodLogId, UserId};
use crate::domain::period_log::{PeriodLog, PeriodLogError};
use crate::ports::{PartnerRepository, PeriodLogRepository};

/// Query for one of the partner's period logs.
#[derive(Debug, Clone)]
pub struct GetPeriodLogQuery {
    pub user_id: UserId,
    pub log_id: PeriodLogId,
}

/// Handler for retrieving a period log.
pub struct GetPeriodLogHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
}

impl GetPeriodLogHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        period_logs: Arc<dyn PeriodLogRepository>,
    ) -> Self {
        Self {
            partners,
            period_logs,
        }
    }

    /// Logs of another user's partner are reported as not found.
    pub async fn handle(&self, query: GetPeriodLogQuery) -> Result<PeriodLog, PeriodLogError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| PeriodLogError::partner_not_found(query.user_id.clone()))?;

        self.period_logs
            .find_by_id(&query.log_id)
            .await?
            .filter(|log| log.partner_id() == partner.id())
            .ok_or_else(|| PeriodLogError::not_found(query.log_id))
    }
}
