//! UpdatePeriodLogHandler - Command handler for editing a period log.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, PeriodLogId, UserId};
use crate::domain::period_log::{PeriodLog, PeriodLogError, PeriodLogUpdate};
use crate::ports::{PartnerRepository, PeriodLogRepository};

/// Command to change the end date, flow or notes of a period log.
#[derive(Debug, Clone)]
pub struct UpdatePeriodLogCommand {
    pub user_id: UserId,
    pub log_id: PeriodLogId,
    pub update: PeriodLogUpdate,
}

/// Handler for updating period logs.
pub struct UpdatePeriodLogHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
}

impl UpdatePeriodLogHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        period_logs: Arc<dyn PeriodLogRepository>,
    ) -> Self {
        Self {
            partners,
            period_logs,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePeriodLogCommand,
        metadata: CommandMetadata,
    ) -> Result<PeriodLog, PeriodLogError> {
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| PeriodLogError::partner_not_found(cmd.user_id.clone()))?;

        let mut log = self
            .period_logs
            .find_by_id(&cmd.log_id)
            .await?
            .filter(|log| log.partner_id() == partner.id())
            .ok_or_else(|| PeriodLogError::not_found(cmd.log_id))?;

        log.apply(cmd.update)?;
        self.period_logs.update(&log).await?;

        tracing::info!(
            period_log_id = %log.id(),
            correlation_id = %metadata.correlation_id(),
            "Period log updated"
        );
        Ok(log)
    }
}
