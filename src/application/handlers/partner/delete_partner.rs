//! DeletePartnerHandler - Command handler for removing the partner profile.
//!
//! Deleting the partner removes every period and daily log with it.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId};
use crate::domain::partner::PartnerError;
use crate::ports::PartnerRepository;

/// Command to delete the user's partner profile.
#[derive(Debug, Clone)]
pub struct DeletePartnerCommand {
    pub user_id: UserId,
}

/// Handler for deleting partner profiles.
pub struct DeletePartnerHandler {
    partners: Arc<dyn PartnerRepository>,
}

impl DeletePartnerHandler {
    pub fn new(partners: Arc<dyn PartnerRepository>) -> Self {
        Self { partners }
    }

    pub async fn handle(
        &self,
        cmd: DeletePartnerCommand,
        metadata: CommandMetadata,
    ) -> Result<(), PartnerError> {
        let partner = self
            .partners
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or_else(|| PartnerError::not_found(cmd.user_id.clone()))?;

        self.partners.delete(partner.id()).await?;

        tracing::info!(
            partner_id = %partner.id(),
            correlation_id = %metadata.correlation_id(),
            "Partner profile deleted"
        );
        Ok(())
    }
}
