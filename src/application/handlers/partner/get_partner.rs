//! GetPartnerHandler - Query handler for the user's partner profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::partner::{Partner, PartnerError};
use crate::ports::PartnerRepository;

/// Query for the partner owned by a user.
#[derive(Debug, Clone)]
pub struct GetPartnerQuery {
    pub user_id: UserId,
}

/// Handler for retrieving the partner profile.
pub struct GetPartnerHandler {
    partners: Arc<dyn PartnerRepository>,
}

impl GetPartnerHandler {
    pub fn new(partners: Arc<dyn PartnerRepository>) -> Self {
        Self { partners }
    }

    pub async fn handle(&self, query: GetPartnerQuery) -> Result<Partner, PartnerError> {
        self.partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| PartnerError::not_found(query.user_id))
    }
}
