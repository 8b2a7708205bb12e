//! GetCurrentStatusHandler - Query handler for where the partner is today.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::cycle::{CycleError, CycleStatus};
use crate::domain::foundation::UserId;
use crate::ports::PartnerRepository;

/// Query for the cycle status as of `today`.
#[derive(Debug, Clone)]
pub struct GetCurrentStatusQuery {
    pub user_id: UserId,
    pub today: NaiveDate,
}

/// Handler for the current cycle status.
pub struct GetCurrentStatusHandler {
    partners: Arc<dyn PartnerRepository>,
}

impl GetCurrentStatusHandler {
    pub fn new(partners: Arc<dyn PartnerRepository>) -> Self {
        Self { partners }
    }

    pub async fn handle(&self, query: GetCurrentStatusQuery) -> Result<CycleStatus, CycleError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::partner_not_found(query.user_id.clone()))?;

        let status = CycleStatus::compute(&partner.config(), query.today);
        tracing::debug!(
            partner_id = %partner.id(),
            phase = %status.phase,
            current_day = status.current_day,
            "Computed cycle status"
        );
        Ok(status)
    }
}
