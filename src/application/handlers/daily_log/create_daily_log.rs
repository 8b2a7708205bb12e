//! CreateDailyLogHandler - Command handler for a day's check-in.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::daily_log::{DailyLog, DailyLogError, DailyLogUpdate};
use crate::domain::foundation::{CommandMetadata, ErrorCode, UserId};
use crate::ports::{DailyLogRepository, PartnerRepository};

/// Command to record the daily log for `log_date`.
#[derive(Debug, Clone)]
pub struct CreateDailyLogCommand {
    pub user_id: UserId,
    pub log_date: NaiveDate,
    pub fields: DailyLogUpdate,
}

/// Handler for creating daily logs.
pub struct CreateDailyLogHandler {
    partners: Arc<dyn PartnerRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
}

impl CreateDailyLogHandler {
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
        cmd: CreateDailyLogCommand,
        metadata: CommandMetadata,
    ) -> Result<DailyLog, DailyLogError> {
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DailyLogError::partner_not_found(cmd.user_id.clone()))?;

        if self
            .daily_logs
            .find_by_date(partner.id(), cmd.log_date)
            .await?
            .is_some()
        {
            return Err(DailyLogError::already_exists(cmd.log_date));
        }

        let log = DailyLog::new(*partner.id(), cmd.log_date, cmd.fields)?;
        self.daily_logs.save(&log).await.map_err(|e| {
            if e.code == ErrorCode::DailyLogAlreadyExists {
                DailyLogError::already_exists(cmd.log_date)
            } else {
                e.into()
            }
        })?;

        tracing::info!(
            partner_id = %partner.id(),
            log_date = %cmd.log_date,
            correlation_id = %metadata.correlation_id(),
            "Daily log created"
        );
        Ok(log)
    }
}
