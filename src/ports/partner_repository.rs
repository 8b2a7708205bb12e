//! Partner repository port.
//!
//! Partners are looked up by the owning user; every request resolves the
//! authenticated user to their partner before touching logs.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::RecordingOutcome;
use crate::domain::foundation::{DomainError, PartnerId, UserId};
use crate::domain::partner::Partner;
use crate::domain::period_log::PeriodLog;

/// A partner update whose cycle settings changed, with the forecasts that
/// replace the stale ones.
///
/// Applied atomically by `PartnerRepository::update_with_forecasts`.
#[derive(Debug, Clone)]
pub struct ForecastRefresh {
    /// The partner after the update.
    pub partner: Partner,

    /// Predicted logs starting strictly after this date are deleted.
    pub stale_after: NaiveDate,

    /// Forecasts to write; dates already holding a log are skipped.
    pub forecasts: Vec<PeriodLog>,
}

/// Persistence for the Partner aggregate.
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// Save a new partner.
    ///
    /// # Errors
    ///
    /// - `PartnerAlreadyExists` if the user already owns a partner
    /// - `DatabaseError` on persistence failure
    async fn save(&self, partner: &Partner) -> Result<(), DomainError>;

    /// Update an existing partner.
    ///
    /// # Errors
    ///
    /// - `PartnerNotFound` if the partner doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, partner: &Partner) -> Result<(), DomainError>;

    /// Updates a partner and replaces its forecasts in one transaction:
    ///
    /// 1. update the partner row
    /// 2. delete predicted logs starting after `stale_after`
    /// 3. insert the forecasts
    ///
    /// # Errors
    ///
    /// - `PartnerNotFound` if the partner doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update_with_forecasts(
        &self,
        refresh: &ForecastRefresh,
    ) -> Result<RecordingOutcome, DomainError>;

    /// Find the partner owned by a user.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Partner>, DomainError>;

    /// Delete a partner together with all of its period and daily logs.
    ///
    /// # Errors
    ///
    /// - `PartnerNotFound` if the partner doesn't exist
    async fn delete(&self, id: &PartnerId) -> Result<(), DomainError>;
}
