//! In-memory store implementing every repository port.
//!
//! All three tables sit behind one mutex so that multi-table writes
//! (period recording, partner cascade delete) are atomic the same way a
//! database transaction would make them. Used by tests and for running the
//! server without PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::daily_log::DailyLog;
use crate::domain::foundation::{
    DailyLogId, DomainError, ErrorCode, PartnerId, PeriodLogId, UserId,
};
use crate::domain::partner::Partner;
use crate::domain::period_log::PeriodLog;
use crate::ports::{
    DailyLogRepository, ForecastRefresh, ListOptions, PartnerRepository, PeriodLogRepository,
    PeriodRecording, RecordingOutcome,
};

#[derive(Debug, Default)]
struct Tables {
    partners: HashMap<PartnerId, Partner>,
    period_logs: HashMap<PeriodLogId, PeriodLog>,
    daily_logs: HashMap<DailyLogId, DailyLog>,
}

impl Tables {
    fn period_log_at(&self, partner_id: &PartnerId, start_date: NaiveDate) -> Option<&PeriodLog> {
        self.period_logs
            .values()
            .find(|l| l.partner_id() == partner_id && l.start_date() == start_date)
    }

    fn insert_forecasts(&mut self, forecasts: &[PeriodLog]) -> u64 {
        let mut written = 0;
        for forecast in forecasts {
            if self
                .period_log_at(forecast.partner_id(), forecast.start_date())
                .is_none()
            {
                self.period_logs.insert(*forecast.id(), forecast.clone());
                written += 1;
            }
        }
        written
    }
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored period logs across all partners.
    pub async fn period_log_count(&self) -> usize {
        self.tables.lock().await.period_logs.len()
    }

    /// Number of stored daily logs across all partners.
    pub async fn daily_log_count(&self) -> usize {
        self.tables.lock().await.daily_logs.len()
    }
}

fn page<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K, options: &ListOptions) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
        .into_iter()
        .skip(options.skip as usize)
        .take(options.limit as usize)
        .collect()
}

#[async_trait]
impl PartnerRepository for InMemoryStore {
    async fn save(&self, partner: &Partner) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        if tables
            .partners
            .values()
            .any(|p| p.user_id() == partner.user_id())
        {
            return Err(DomainError::new(
                ErrorCode::PartnerAlreadyExists,
                "Partner profile already exists",
            ));
        }
        tables.partners.insert(*partner.id(), partner.clone());
        Ok(())
    }

    async fn update(&self, partner: &Partner) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        match tables.partners.get_mut(partner.id()) {
            Some(existing) => {
                *existing = partner.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PartnerNotFound,
                format!("Partner not found: {}", partner.id()),
            )),
        }
    }

    async fn update_with_forecasts(
        &self,
        refresh: &ForecastRefresh,
    ) -> Result<RecordingOutcome, DomainError> {
        let mut tables = self.tables.lock().await;
        let partner_id = *refresh.partner.id();
        match tables.partners.get_mut(&partner_id) {
            Some(existing) => *existing = refresh.partner.clone(),
            None => {
                return Err(DomainError::new(
                    ErrorCode::PartnerNotFound,
                    format!("Partner not found: {}", partner_id),
                ))
            }
        }

        let before = tables.period_logs.len();
        tables.period_logs.retain(|_, l| {
            !(l.partner_id() == &partner_id
                && l.is_predicted()
                && l.start_date() > refresh.stale_after)
        });
        let stale_predictions_removed = (before - tables.period_logs.len()) as u64;
        let forecasts_written = tables.insert_forecasts(&refresh.forecasts);

        Ok(RecordingOutcome {
            stale_predictions_removed,
            forecasts_written,
        })
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Partner>, DomainError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .partners
            .values()
            .find(|p| p.user_id() == user_id)
            .cloned())
    }

    async fn delete(&self, id: &PartnerId) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        if tables.partners.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::PartnerNotFound,
                format!("Partner not found: {}", id),
            ));
        }
        tables.period_logs.retain(|_, log| log.partner_id() != id);
        tables.daily_logs.retain(|_, log| log.partner_id() != id);
        Ok(())
    }
}

#[async_trait]
impl PeriodLogRepository for InMemoryStore {
    async fn record_actual(
        &self,
        recording: &PeriodRecording,
    ) -> Result<RecordingOutcome, DomainError> {
        let mut tables = self.tables.lock().await;
        let log = &recording.log;
        let partner_id = *log.partner_id();
        let start = log.start_date();

        if !tables.partners.contains_key(&partner_id) {
            return Err(DomainError::new(
                ErrorCode::PartnerNotFound,
                format!("Partner not found: {}", partner_id),
            ));
        }
        if tables
            .period_log_at(&partner_id, start)
            .is_some_and(|existing| !existing.is_predicted())
        {
            return Err(DomainError::new(
                ErrorCode::PeriodLogAlreadyExists,
                format!("Period log already exists for {}", start),
            ));
        }

        let before = tables.period_logs.len();
        tables.period_logs.retain(|_, l| {
            !(l.partner_id() == &partner_id && l.is_predicted() && l.start_date() >= start)
        });
        let stale_predictions_removed = (before - tables.period_logs.len()) as u64;

        tables.period_logs.insert(*log.id(), log.clone());
        if let Some(partner) = tables.partners.get_mut(&partner_id) {
            partner.record_period_start(start);
        }
        let forecasts_written = tables.insert_forecasts(&recording.forecasts);

        Ok(RecordingOutcome {
            stale_predictions_removed,
            forecasts_written,
        })
    }

    async fn save_forecasts(&self, forecasts: &[PeriodLog]) -> Result<u64, DomainError> {
        Ok(self.tables.lock().await.insert_forecasts(forecasts))
    }

    async fn update(&self, log: &PeriodLog) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        match tables.period_logs.get_mut(log.id()) {
            Some(existing) => {
                *existing = log.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PeriodLogNotFound,
                format!("Period log not found: {}", log.id()),
            )),
        }
    }

    async fn delete(&self, id: &PeriodLogId) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        tables.period_logs.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::PeriodLogNotFound,
                format!("Period log not found: {}", id),
            )
        })
    }

    async fn find_by_id(&self, id: &PeriodLogId) -> Result<Option<PeriodLog>, DomainError> {
        Ok(self.tables.lock().await.period_logs.get(id).cloned())
    }

    async fn find_by_start_date(
        &self,
        partner_id: &PartnerId,
        start_date: NaiveDate,
    ) -> Result<Option<PeriodLog>, DomainError> {
        let tables = self.tables.lock().await;
        Ok(tables.period_log_at(partner_id, start_date).cloned())
    }

    async fn list_by_partner(
        &self,
        partner_id: &PartnerId,
        options: &ListOptions,
    ) -> Result<Vec<PeriodLog>, DomainError> {
        let tables = self.tables.lock().await;
        let logs = tables
            .period_logs
            .values()
            .filter(|l| l.partner_id() == partner_id)
            .cloned()
            .collect();
        Ok(page(logs, |l: &PeriodLog| l.start_date(), options))
    }

    async fn list_actual(
        &self,
        partner_id: &PartnerId,
        limit: u32,
    ) -> Result<Vec<PeriodLog>, DomainError> {
        let tables = self.tables.lock().await;
        let logs = tables
            .period_logs
            .values()
            .filter(|l| l.partner_id() == partner_id && !l.is_predicted())
            .cloned()
            .collect();
        Ok(page(
            logs,
            |l: &PeriodLog| l.start_date(),
            &ListOptions { skip: 0, limit },
        ))
    }
}

#[async_trait]
impl DailyLogRepository for InMemoryStore {
    async fn save(&self, log: &DailyLog) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        let duplicate = tables
            .daily_logs
            .values()
            .any(|l| l.partner_id() == log.partner_id() && l.log_date() == log.log_date());
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DailyLogAlreadyExists,
                format!("Daily log already exists for {}", log.log_date()),
            ));
        }
        tables.daily_logs.insert(*log.id(), log.clone());
        Ok(())
    }

    async fn update(&self, log: &DailyLog) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        match tables.daily_logs.get_mut(log.id()) {
            Some(existing) => {
                *existing = log.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::DailyLogNotFound,
                format!("Daily log not found: {}", log.id()),
            )),
        }
    }

    async fn delete(&self, id: &DailyLogId) -> Result<(), DomainError> {
        let mut tables = self.tables.lock().await;
        tables.daily_logs.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DailyLogNotFound,
                format!("Daily log not found: {}", id),
            )
        })
    }

    async fn find_by_date(
        &self,
        partner_id: &PartnerId,
        log_date: NaiveDate,
    ) -> Result<Option<DailyLog>, DomainError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .daily_logs
            .values()
            .find(|l| l.partner_id() == partner_id && l.log_date() == log_date)
            .cloned())
    }

    async fn list_by_partner(
        &self,
        partner_id: &PartnerId,
        options: &ListOptions,
    ) -> Result<Vec<DailyLog>, DomainError> {
        let tables = self.tables.lock().await;
        let logs = tables
            .daily_logs
            .values()
            .filter(|l| l.partner_id() == partner_id)
            .cloned()
            .collect();
        Ok(page(logs, |l: &DailyLog| l.log_date(), options))
    }

    async fn list_range(
        &self,
        partner_id: &PartnerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLog>, DomainError> {
        let tables = self.tables.lock().await;
        let mut logs: Vec<DailyLog> = tables
            .daily_logs
            .values()
            .filter(|l| {
                l.partner_id() == partner_id && l.log_date() >= start && l.log_date() <= end
            })
            .cloned()
            .collect();
        logs.sort_by_key(|l| l.log_date());
        Ok(logs)
    }
}
