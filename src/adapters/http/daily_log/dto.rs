//! HTTP DTOs for daily log endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::daily_log::{DailyLog, DailyLogUpdate, Mood};

pub const DEFAULT_PAGE_LIMIT: u32 = 30;

/// Request body for a new check-in.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDailyLogRequest {
    pub log_date: NaiveDate,
    #[serde(flatten)]
    pub fields: DailyLogFields,
}

/// Optional check-in fields shared by create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyLogFields {
    pub mood: Option<Mood>,
    pub energy_level: Option<i32>,
    pub symptoms: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl From<DailyLogFields> for DailyLogUpdate {
    fn from(fields: DailyLogFields) -> Self {
        DailyLogUpdate {
            mood: fields.mood,
            energy_level: fields.energy_level,
            symptoms: fields.symptoms,
            notes: fields.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDailyLogsParams {
    #[serde(default)]
    pub skip: u32,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyLogRangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogResponse {
    pub id: String,
    pub log_date: NaiveDate,
    pub mood: Option<Mood>,
    pub energy_level: Option<i32>,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&DailyLog> for DailyLogResponse {
    fn from(log: &DailyLog) -> Self {
        Self {
            id: log.id().to_string(),
            log_date: log.log_date(),
            mood: log.mood(),
            energy_level: log.energy_level(),
            symptoms: log.symptoms().to_vec(),
            notes: log.notes().map(str::to_string),
            created_at: *log.created_at().as_datetime(),
            updated_at: *log.updated_at().as_datetime(),
        }
    }
}
