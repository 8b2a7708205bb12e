//! GetCyclePatternsHandler - Query handler for the history summary.

use std::sync::Arc;

use crate::domain::cycle::{analyze_patterns, CycleError, CyclePattern};
use crate::domain::foundation::UserId;
use crate::ports::{DailyLogRepository, ListOptions, PartnerRepository, PeriodLogRepository};

#[derive(Debug, Clone)]
pub struct GetCyclePatternsQuery {
    pub user_id: UserId,
}

/// Handler for cycle pattern reports.
///
/// Reads the most recent `period_log_limit` actual periods and
/// `daily_log_limit` daily logs.
pub struct GetCyclePatternsHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
    period_log_limit: u32,
    daily_log_limit: u32,
}

impl GetCyclePatternsHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        period_logs: Arc<dyn PeriodLogRepository>,
        daily_logs: Arc<dyn DailyLogRepository>,
        period_log_limit: u32,
        daily_log_limit: u32,
    ) -> Self {
        Self {
            partners,
            period_logs,
            daily_logs,
            period_log_limit,
            daily_log_limit,
        }
    }

    pub async fn handle(&self, query: GetCyclePatternsQuery) -> Result<CyclePattern, CycleError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::partner_not_found(query.user_id.clone()))?;

        let period_logs = self
            .period_logs
            .list_actual(partner.id(), self.period_log_limit)
            .await?;
        let daily_logs = self
            .daily_logs
            .list_by_partner(partner.id(), &ListOptions::first(self.daily_log_limit))
            .await?;

        tracing::debug!(
            partner_id = %partner.id(),
            period_logs = period_logs.len(),
            daily_logs = daily_logs.len(),
            "Analyzing cycle patterns"
        );
        Ok(analyze_patterns(&partner.config(), &period_logs, &daily_logs))
    }
}
