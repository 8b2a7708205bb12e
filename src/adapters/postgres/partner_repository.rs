//! PostgreSQL implementation of PartnerRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgExecutor, PgPool};

use super::period_log_repository::insert_log;
use super::rows::{column, is_unique_violation, parse_column};
use crate::domain::foundation::{DomainError, ErrorCode, PartnerId, Timestamp, UserId};
use crate::domain::partner::{CycleRegularity, NotificationPreferences, Partner};
use crate::ports::{ForecastRefresh, PartnerRepository, RecordingOutcome};

const PARTNER_COLUMNS: &str = "id, user_id, name, cycle_length, period_length, cycle_regularity, \
     last_period_start, period_reminder, pms_alert, ovulation_alert, reminder_days_before, \
     timezone, created_at, updated_at";

/// PostgreSQL implementation of PartnerRepository.
#[derive(Clone)]
pub struct PostgresPartnerRepository {
    pool: PgPool,
}

impl PostgresPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for PostgresPartnerRepository {
    async fn save(&self, partner: &Partner) -> Result<(), DomainError> {
        let prefs = partner.notifications();
        let result = sqlx::query(
            r#"
            INSERT INTO partners (
                id, user_id, name, cycle_length, period_length, cycle_regularity,
                last_period_start, period_reminder, pms_alert, ovulation_alert,
                reminder_days_before, timezone, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(partner.id().as_uuid())
        .bind(partner.user_id().as_str())
        .bind(partner.name())
        .bind(partner.cycle_length())
        .bind(partner.period_length())
        .bind(partner.cycle_regularity().as_str())
        .bind(partner.last_period_start())
        .bind(prefs.period_reminder)
        .bind(prefs.pms_alert)
        .bind(prefs.ovulation_alert)
        .bind(partner.reminder_days_before())
        .bind(partner.timezone())
        .bind(partner.created_at().as_datetime())
        .bind(partner.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(DomainError::new(
                ErrorCode::PartnerAlreadyExists,
                "Partner profile already exists",
            )),
            Err(e) => Err(DomainError::database("insert partner", e)),
        }
    }

    async fn update(&self, partner: &Partner) -> Result<(), DomainError> {
        update_row(&self.pool, partner).await
    }

    async fn update_with_forecasts(
        &self,
        refresh: &ForecastRefresh,
    ) -> Result<RecordingOutcome, DomainError> {
        let partner = &refresh.partner;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        update_row(&mut *tx, partner).await?;

        let stale = sqlx::query(
            "DELETE FROM period_logs \
             WHERE partner_id = $1 AND is_predicted = TRUE AND start_date > $2",
        )
        .bind(partner.id().as_uuid())
        .bind(refresh.stale_after)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("delete stale predictions", e))?;

        let mut forecasts_written = 0;
        for forecast in &refresh.forecasts {
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

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Partner>, DomainError> {
        let sql = format!("SELECT {} FROM partners WHERE user_id = $1", PARTNER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch partner", e))?;

        row.as_ref().map(row_to_partner).transpose()
    }

    async fn delete(&self, id: &PartnerId) -> Result<(), DomainError> {
        // Period and daily logs go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM partners WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete partner", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PartnerNotFound,
                format!("Partner not found: {}", id),
            ));
        }

        Ok(())
    }
}

/// Writes every mutable partner column.
async fn update_row<'e, E>(executor: E, partner: &Partner) -> Result<(), DomainError>
where
    E: PgExecutor<'e>,
{
    let prefs = partner.notifications();
    let result = sqlx::query(
        r#"
        UPDATE partners SET
            name = $2,
            cycle_length = $3,
            period_length = $4,
            cycle_regularity = $5,
            last_period_start = $6,
            period_reminder = $7,
            pms_alert = $8,
            ovulation_alert = $9,
            reminder_days_before = $10,
            timezone = $11,
            updated_at = $12
        WHERE id = $1
        "#,
    )
    .bind(partner.id().as_uuid())
    .bind(partner.name())
    .bind(partner.cycle_length())
    .bind(partner.period_length())
    .bind(partner.cycle_regularity().as_str())
    .bind(partner.last_period_start())
    .bind(prefs.period_reminder)
    .bind(prefs.pms_alert)
    .bind(prefs.ovulation_alert)
    .bind(partner.reminder_days_before())
    .bind(partner.timezone())
    .bind(partner.updated_at().as_datetime())
    .execute(executor)
    .await
    .map_err(|e| DomainError::database("update partner", e))?;

    if result.rows_affected() == 0 {
        return Err(DomainError::new(
            ErrorCode::PartnerNotFound,
            format!("Partner not found: {}", partner.id()),
        ));
    }

    Ok(())
}

fn row_to_partner(row: &PgRow) -> Result<Partner, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let regularity: String = column(row, "cycle_regularity")?;
    let last_period_start: Option<NaiveDate> = column(row, "last_period_start")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    Ok(Partner::reconstitute(
        PartnerId::from_uuid(id),
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        column(row, "name")?,
        column(row, "cycle_length")?,
        column(row, "period_length")?,
        parse_column::<CycleRegularity>(&regularity, "cycle_regularity")?,
        last_period_start,
        NotificationPreferences {
            period_reminder: column(row, "period_reminder")?,
            pms_alert: column(row, "pms_alert")?,
            ovulation_alert: column(row, "ovulation_alert")?,
        },
        column(row, "reminder_days_before")?,
        column(row, "timezone")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
