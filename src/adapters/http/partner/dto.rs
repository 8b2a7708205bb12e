//! HTTP DTOs for partner profile endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::partner::{CycleRegularity, Partner, PartnerUpdate};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create the partner profile. Omitted settings take defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnerRequest {
    pub name: String,
    #[serde(flatten)]
    pub settings: PartnerSettings,
}

/// Partial profile update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePartnerRequest {
    pub name: Option<String>,
    #[serde(flatten)]
    pub settings: PartnerSettings,
}

/// Settings shared by create and update bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartnerSettings {
    pub cycle_length: Option<i32>,
    pub period_length: Option<i32>,
    pub cycle_regularity: Option<CycleRegularity>,
    pub last_period_start: Option<NaiveDate>,
    pub period_reminder: Option<bool>,
    pub pms_alert: Option<bool>,
    pub ovulation_alert: Option<bool>,
    pub reminder_days_before: Option<i32>,
    pub timezone: Option<String>,
}

impl PartnerSettings {
    pub fn into_update(self, name: Option<String>) -> PartnerUpdate {
        PartnerUpdate {
            name,
            cycle_length: self.cycle_length,
            period_length: self.period_length,
            cycle_regularity: self.cycle_regularity,
            last_period_start: self.last_period_start,
            period_reminder: self.period_reminder,
            pms_alert: self.pms_alert,
            ovulation_alert: self.ovulation_alert,
            reminder_days_before: self.reminder_days_before,
            timezone: self.timezone,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerResponse {
    pub id: String,
    pub name: String,
    pub cycle_length: i32,
    pub period_length: i32,
    pub cycle_regularity: CycleRegularity,
    pub last_period_start: Option<NaiveDate>,
    pub period_reminder: bool,
    pub pms_alert: bool,
    pub ovulation_alert: bool,
    pub reminder_days_before: i32,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Partner> for PartnerResponse {
    fn from(partner: &Partner) -> Self {
        let notifications = partner.notifications();
        Self {
            id: partner.id().to_string(),
            name: partner.name().to_string(),
            cycle_length: partner.cycle_length(),
            period_length: partner.period_length(),
            cycle_regularity: partner.cycle_regularity(),
            last_period_start: partner.last_period_start(),
            period_reminder: notifications.period_reminder,
            pms_alert: notifications.pms_alert,
            ovulation_alert: notifications.ovulation_alert,
            reminder_days_before: partner.reminder_days_before(),
            timezone: partner.timezone().to_string(),
            created_at: *partner.created_at().as_datetime(),
            updated_at: *partner.updated_at().as_datetime(),
        }
    }
}
