//! Shared fixtures for handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::adapters::memory::InMemoryStore;
use crate::domain::daily_log::DailyLog;
use crate::domain::foundation::{DailyLogId, DomainError, PartnerId, PeriodLogId, UserId};
use crate::domain::partner::{Partner, PartnerUpdate};
use crate::domain::period_log::PeriodLog;
use crate::ports::{
    DailyLogRepository, ForecastRefresh, ListOptions, PartnerRepository, PeriodLogRepository,
    PeriodRecording, RecordingOutcome,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

/// Stores a partner for `user_id` with a 28/5 cycle.
pub async fn seed_partner(
    store: &InMemoryStore,
    user_id: &UserId,
    last_period_start: Option<NaiveDate>,
) -> Partner {
    let partner = Partner::new(
        PartnerId::new(),
        user_id.clone(),
        "Sam".to_string(),
        PartnerUpdate {
            last_period_start,
            ..Default::default()
        },
    )
    .unwrap();
    PartnerRepository::save(store, &partner).await.unwrap();
    partner
}

/// Every call fails like an unreachable database.
pub struct FailingStore;

fn down() -> DomainError {
    DomainError::database("query", "connection refused")
}

#[async_trait]
impl PartnerRepository for FailingStore {
    async fn save(&self, _partner: &Partner) -> Result<(), DomainError> {
        Err(down())
    }
    async fn update(&self, _partner: &Partner) -> Result<(), DomainError> {
        Err(down())
    }
    async fn update_with_forecasts(
        &self,
        _refresh: &ForecastRefresh,
    ) -> Result<RecordingOutcome, DomainError> {
        Err(down())
    }
    async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Option<Partner>, DomainError> {
        Err(down())
    }
    async fn delete(&self, _id: &PartnerId) -> Result<(), DomainError> {
        Err(down())
    }
}

#[async_trait]
impl PeriodLogRepository for FailingStore {
    async fn record_actual(
        &self,
        _recording: &PeriodRecording,
    ) -> Result<RecordingOutcome, DomainError> {
        Err(down())
    }
    async fn save_forecasts(&self, _forecasts: &[PeriodLog]) -> Result<u64, DomainError> {
        Err(down())
    }
    async fn update(&self, _log: &PeriodLog) -> Result<(), DomainError> {
        Err(down())
    }
    async fn delete(&self, _id: &PeriodLogId) -> Result<(), DomainError> {
        Err(down())
    }
    async fn find_by_id(&self, _id: &PeriodLogId) -> Result<Option<PeriodLog>, DomainError> {
        Err(down())
    }
    async fn find_by_start_date(
        &self,
        _partner_id: &PartnerId,
        _start_date: NaiveDate,
    ) -> Result<Option<PeriodLog>, DomainError> {
        Err(down())
    }
    async fn list_by_partner(
        &self,
        _partner_id: &PartnerId,
        _options: &ListOptions,
    ) -> Result<Vec<PeriodLog>, DomainError> {
        Err(down())
    }
    async fn list_actual(
        &self,
        _partner_id: &PartnerId,
        _limit: u32,
    ) -> Result<Vec<PeriodLog>, DomainError> {
        Err(down())
    }
}

#[async_trait]
impl DailyLogRepository for FailingStore {
    async fn save(&self, _log: &DailyLog) -> Result<(), DomainError> {
        Err(down())
    }
    async fn update(&self, _log: &DailyLog) -> Result<(), DomainError> {
        Err(down())
    }
    async fn delete(&self, _id: &DailyLogId) -> Result<(), DomainError> {
        Err(down())
    }
    async fn find_by_date(
        &self,
        _partner_id: &PartnerId,
        _log_date: NaiveDate,
    ) -> Result<Option<DailyLog>, DomainError> {
        Err(down())
    }
    async fn list_by_partner(
        &self,
        _partner_id: &PartnerId,
        _options: &ListOptions,
    ) -> Result<Vec<DailyLog>, DomainError> {
        Err(down())
    }
    async fn list_range(
        &self,
        _partner_id: &PartnerId,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<DailyLog>, DomainError> {
        Err(down())
    }
}
