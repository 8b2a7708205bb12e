//! GetPhaseTableHandler - Query handler for the phase breakdown of a cycle.

use std::sync::Arc;

use crate::domain::cycle::{phase_table, CycleError, PhaseInfo, TipSource};
use crate::domain::foundation::UserId;
use crate::ports::PartnerRepository;

#[derive(Debug, Clone)]
pub struct GetPhaseTableQuery {
    pub user_id: UserId,
}

/// Handler for the phase table of the partner's configured cycle length.
pub struct GetPhaseTableHandler {
    partners: Arc<dyn PartnerRepository>,
    tips: Arc<dyn TipSource>,
}

impl GetPhaseTableHandler {
    pub fn new(partners: Arc<dyn PartnerRepository>, tips: Arc<dyn TipSource>) -> Self {
        Self { partners, tips }
    }

    pub async fn handle(&self, query: GetPhaseTableQuery) -> Result<Vec<PhaseInfo>, CycleError> {
        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::partner_not_found(query.user_id.clone()))?;

        Ok(phase_table(partner.cycle_length(), self.tips.as_ref()))
    }
}
