//! PostgreSQL implementation of PeriodLogRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgExecutor, PgPool};

use super::rows::{column, is_unique_violation, parse_column};
use crate::domain::foundation::{DomainError, ErrorCode, PartnerId, PeriodLogId, Timestamp};
use crate::domain::period_log::{FlowIntensity, PeriodLog};
use crate::ports::{ListOptions, PeriodLogRepository, PeriodRecording, RecordingOutcome};

const PERIOD_LOG_COLUMNS: &str = "id, partner_id, start_date, end_date, cycle_length, \
     flow_intensity, is_predicted, notes, created_at, updated_at";

/// PostgreSQL implementation of PeriodLogRepository.
#[derive(Clone)]
pub struct PostgresPeriodLogRepository {
    pool: PgPool,
}

impl PostgresPeriodLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeriodLogRepository for PostgresPeriodLogRepository {
    async fn record_actual(
        &self,
        recording: &PeriodRecording,
    ) -> Result<RecordingOutcome, DomainError> {
        let log = &recording.log;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        let existing: Option<(bool,)> = sqlx::query_as(
            "SELECT is_predicted FROM period_logs \
             WHERE partner_id = $1 AND start_date = $2 FOR UPDATE",
        )
        .bind(log.partner_id().as_uuid())
        .bind(log.start_date())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("check existing period log", e))?;

        if matches!(existing, Some((false,))) {
            return Err(already_exists(log.start_date()));
        }

        let stale = sqlx::query(
            "DELETE FROM period_logs \
             WHERE partner_id = $1 AND is_predicted = TRUE AND start_date >= $2",
        )
        .bind(log.partner_id().as_uuid())
        .bind(log.start_date())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("delete stale predictions", e))?;

        insert_log(&mut *tx, log, false).await.map_err(|e| {
            if is_unique_violation(&e) {
                already_exists(log.start_date())
            } else {
                DomainError::database("insert period log", e)
            }
        })?;

        let anchored = sqlx::query(
            "UPDATE partners SET last_period_start = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(log.partner_id().as_uuid())
        .bind(log.start_date())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("update last period start", e))?;

        if anchored.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PartnerNotFound,
                format!("Partner not found: {}", log.partner_id()),
            ));
        }

        let mut forecasts_written = 0;
        for forecast in &recording.forecasts {
            forecasts_written += insert_log(&mut *tx, forecast, true)
                .await
                .map_err(|e| DomainError::database("insert forecast", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;

        Ok(RecordingOutcome {
            stale_predictions_removed: stale.rows_affected(),
            forecasts_written,
        })
    }

    async fn save_forecasts(&self, forecasts: &[PeriodLog]) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        let mut written = 0;
        for forecast in forecasts {
            written += insert_log(&mut *tx, forecast, true)
                .await
                .map_err(|e| DomainError::database("insert forecast", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;
        Ok(written)
    }

    async fn update(&self, log: &PeriodLog) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE period_logs SET
                end_date = $2,
                flow_intensity = $3,
                notes = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(log.id().as_uuid())
        .bind(log.end_date())
        .bind(log.flow_intensity().map(|f| f.as_str()))
        .bind(log.notes())
        .bind(log.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update period log", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(log.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: &PeriodLogId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM period_logs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete period log", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &PeriodLogId) -> Result<Option<PeriodLog>, DomainError> {
        let sql = format!("SELECT {} FROM period_logs WHERE id = $1", PERIOD_LOG_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch period log", e))?;

        row.as_ref().map(row_to_period_log).transpose()
    }

    async fn find_by_start_date(
        &self,
        partner_id: &PartnerId,
        start_date: NaiveDate,
    ) -> Result<Option<PeriodLog>, DomainError> {
        let sql = format!(
            "SELECT {} FROM period_logs WHERE partner_id = $1 AND start_date = $2",
            PERIOD_LOG_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(partner_id.as_uuid())
            .bind(start_date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch period log by date", e))?;

        row.as_ref().map(row_to_period_log).transpose()
    }

    async fn list_by_partner(
        &self,
        partner_id: &PartnerId,
        options: &ListOptions,
    ) -> Result<Vec<PeriodLog>, DomainError> {
        let sql = format!(
            "SELECT {} FROM period_logs WHERE partner_id = $1 \
             ORDER BY start_date DESC OFFSET $2 LIMIT $3",
            PERIOD_LOG_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(partner_id.as_uuid())
            .bind(i64::from(options.skip))
            .bind(i64::from(options.limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list period logs", e))?;

        rows.iter().map(row_to_period_log).collect()
    }

    async fn list_actual(
        &self,
        partner_id: &PartnerId,
        limit: u32,
    ) -> Result<Vec<PeriodLog>, DomainError> {
        let sql = format!(
            "SELECT {} FROM period_logs WHERE partner_id = $1 AND is_predicted = FALSE \
             ORDER BY start_date DESC LIMIT $2",
            PERIOD_LOG_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(partner_id.as_uuid())
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list actual period logs", e))?;

        rows.iter().map(row_to_period_log).collect()
    }
}

/// Inserts one log. With `skip_existing`, a log already on that date wins
/// and nothing is written. Returns rows written.
pub(super) async fn insert_log<'e, E>(
    executor: E,
    log: &PeriodLog,
    skip_existing: bool,
) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let conflict = if skip_existing {
        "ON CONFLICT (partner_id, start_date) DO NOTHING"
    } else {
        ""
    };
    let sql = format!(
        "INSERT INTO period_logs ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) {}",
        PERIOD_LOG_COLUMNS, conflict
    );
    let result = sqlx::query(&sql)
        .bind(log.id().as_uuid())
        .bind(log.partner_id().as_uuid())
        .bind(log.start_date())
        .bind(log.end_date())
        .bind(log.cycle_length())
        .bind(log.flow_intensity().map(|f| f.as_str()))
        .bind(log.is_predicted())
        .bind(log.notes())
        .bind(log.created_at().as_datetime())
        .bind(log.updated_at().as_datetime())
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

fn already_exists(start_date: NaiveDate) -> DomainError {
    DomainError::new(
        ErrorCode::PeriodLogAlreadyExists,
        format!("Period log already exists for {}", start_date),
    )
}

fn not_found(id: &PeriodLogId) -> DomainError {
    DomainError::new(
        ErrorCode::PeriodLogNotFound,
        format!("Period log not found: {}", id),
    )
}

fn row_to_period_log(row: &PgRow) -> Result<PeriodLog, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let partner_id: uuid::Uuid = column(row, "partner_id")?;
    let flow: Option<String> = column(row, "flow_intensity")?;
    let flow_intensity = flow
        .as_deref()
        .map(|value| parse_column::<FlowIntensity>(value, "flow_intensity"))
        .transpose()?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    Ok(PeriodLog::reconstitute(
        PeriodLogId::from_uuid(id),
        PartnerId::from_uuid(partner_id),
        column(row, "start_date")?,
        column(row, "end_date")?,
        column(row, "cycle_length")?,
        flow_intensity,
        column(row, "is_predicted")?,
        column(row, "notes")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
