//! HTTP DTOs for period log endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::period_log::{FlowIntensity, PeriodLog, PeriodLogUpdate};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePeriodLogRequest {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub flow_intensity: Option<FlowIntensity>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePeriodLogRequest {
    pub end_date: Option<NaiveDate>,
    pub flow_intensity: Option<FlowIntensity>,
    pub notes: Option<String>,
}

impl From<UpdatePeriodLogRequest> for PeriodLogUpdate {
    fn from(req: UpdatePeriodLogRequest) -> Self {
        PeriodLogUpdate {
            end_date: req.end_date,
            flow_intensity: req.flow_intensity,
            notes: req.notes,
        }
    }
}

/// Query parameters for listing period logs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPeriodLogsParams {
    #[serde(default)]
    pub skip: u32,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodLogResponse {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub cycle_length: Option<i32>,
    pub flow_intensity: Option<FlowIntensity>,
    pub is_predicted: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PeriodLog> for PeriodLogResponse {
    fn from(log: &PeriodLog) -> Self {
        Self {
            id: log.id().to_string(),
            start_date: log.start_date(),
            end_date: log.end_date(),
            cycle_length: log.cycle_length(),
            flow_intensity: log.flow_intensity(),
            is_predicted: log.is_predicted(),
            notes: log.notes().map(str::to_string),
            created_at: *log.created_at().as_datetime(),
            updated_at: *log.updated_at().as_datetime(),
        }
    }
}
