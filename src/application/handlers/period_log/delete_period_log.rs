//! DeletePeriodLogHandler - Command handler for removing a period log.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, PeriodLogId, UserId};
use crate::domain::period_log::PeriodLogError;
use crate::ports::{PartnerRepository, PeriodLogRepository};

/// Command to delete one of the partner's period logs.
#[derive(Debug, Clone)]
pub struct DeletePeriodLogCommand {
    pub user_id: UserId,
    pub log_id: PeriodLogId,
}

/// Handler for deleting period logs.
pub struct DeletePeriodLogHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
}

impl DeletePeriodLogHandler {
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
        cmd: DeletePeriodLogCommand,
        metadata: CommandMetadata,
    ) -> Result<(), PeriodLogError> {
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| PeriodLogError::partner_not_found(cmd.user_id.clone()))?;

        let log = self
            .period_logs
            .find_by_id(&cmd.log_id)
            .await?
            .filter(|log| log.partner_id() == partner.id())
            .ok_or_else(|| PeriodLogError::not_found(cmd.log_id))?;

        self.period_logs.delete(log.id()).await?;

        tracing::info!(
            period_log_id = %log.id(),
            correlation_id = %metadata.correlation_id(),
            "Period log deleted"
        );
        Ok(())
    }
}
