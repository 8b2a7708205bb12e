//! PostgreSQL implementation of DailyLogRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, is_unique_violation, parse_column};
use crate::domain::daily_log::{DailyLog, Mood};
use crate::domain::foundation::{DailyLogId, DomainError, ErrorCode, PartnerId, Timestamp};
use crate::ports::{DailyLogRepository, ListOptions};

const DAILY_LOG_COLUMNS: &str =
    "id, partner_id, log_date, mood, energy_level, symptoms, notes, created_at, updated_at";

/// PostgreSQL implementation of DailyLogRepository.
#[derive(Clone)]
pub struct PostgresDailyLogRepository {
    pool: PgPool,
}

impl PostgresDailyLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyLogRepository for PostgresDailyLogRepository {
    async fn save(&self, log: &DailyLog) -> Result<(), DomainError> {
        let sql = format!(
            "INSERT INTO daily_logs ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            DAILY_LOG_COLUMNS
        );
        let result = sqlx::query(&sql)
            .bind(log.id().as_uuid())
            .bind(log.partner_id().as_uuid())
            .bind(log.log_date())
            .bind(log.mood().map(|m| m.as_str()))
            .bind(log.energy_level())
            .bind(log.symptoms())
            .bind(log.notes())
            .bind(log.created_at().as_datetime())
            .bind(log.updated_at().as_datetime())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(DomainError::new(
                ErrorCode::DailyLogAlreadyExists,
                format!("Daily log already exists for {}", log.log_date()),
            )),
            Err(e) => Err(DomainError::database("insert daily log", e)),
        }
    }

    async fn update(&self, log: &DailyLog) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE daily_logs SET
                mood = $2,
                energy_level = $3,
                symptoms = $4,
                notes = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(log.id().as_uuid())
        .bind(log.mood().map(|m| m.as_str()))
        .bind(log.energy_level())
        .bind(log.symptoms())
        .bind(log.notes())
        .bind(log.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update daily log", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(log.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: &DailyLogId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM daily_logs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete daily log", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find_by_date(
        &self,
        partner_id: &PartnerId,
        log_date: NaiveDate,
    ) -> Result<Option<DailyLog>, DomainError> {
        let sql = format!(
            "SELECT {} FROM daily_logs WHERE partner_id = $1 AND log_date = $2",
            DAILY_LOG_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(partner_id.as_uuid())
            .bind(log_date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch daily log", e))?;

        row.as_ref().map(row_to_daily_log).transpose()
    }

    async fn list_by_partner(
        &self,
        partner_id: &PartnerId,
        options: &ListOptions,
    ) -> Result<Vec<DailyLog>, DomainError> {
        let sql = format!(
            "SELECT {} FROM daily_logs WHERE partner_id = $1 \
             ORDER BY log_date DESC OFFSET $2 LIMIT $3",
            DAILY_LOG_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(partner_id.as_uuid())
            .bind(i64::from(options.skip))
            .bind(i64::from(options.limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list daily logs", e))?;

        rows.iter().map(row_to_daily_log).collect()
    }

    async fn list_range(
        &self,
        partner_id: &PartnerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLog>, DomainError> {
        let sql = format!(
            "SELECT {} FROM daily_logs WHERE partner_id = $1 \
             AND log_date BETWEEN $2 AND $3 ORDER BY log_date ASC",
            DAILY_LOG_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(partner_id.as_uuid())
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list daily logs in range", e))?;

        rows.iter().map(row_to_daily_log).collect()
    }
}

fn not_found(id: &DailyLogId) -> DomainError {
    DomainError::new(
        ErrorCode::DailyLogNotFound,
        format!("Daily log not found: {}", id),
    )
}

fn row_to_daily_log(row: &PgRow) -> Result<DailyLog, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let partner_id: uuid::Uuid = column(row, "partner_id")?;
    let mood: Option<String> = column(row, "mood")?;
    let mood = mood
        .as_deref()
        .map(|value| parse_column::<Mood>(value, "mood"))
        .transpose()?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    Ok(DailyLog::reconstitute(
        DailyLogId::from_uuid(id),
        PartnerId::from_uuid(partner_id),
        column(row, "log_date")?,
        mood,
        column(row, "energy_level")?,
        column::<Vec<String>>(row, "symptoms")?,
        column(row, "notes")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
