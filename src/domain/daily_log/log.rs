//! Daily check-in entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DailyLogId, PartnerId, Timestamp, ValidationError};

pub const MAX_NOTES_LENGTH: usize = 500;
pub const MAX_SYMPTOM_LENGTH: usize = 50;
pub const ENERGY_MIN: i32 = 1;
pub const ENERGY_MAX: i32 = 5;

/// Observed mood for the day.
///
/// Declaration order doubles as the tie-break order when picking the most
/// frequent mood of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    Meh,
    Rough,
    JustNod,
    PickYourBattles,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Meh => "meh",
            Mood::Rough => "rough",
            Mood::JustNod => "just_nod",
            Mood::PickYourBattles => "pick_your_battles",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "meh" => Ok(Mood::Meh),
            "rough" => Ok(Mood::Rough),
            "just_nod" => Ok(Mood::JustNod),
            "pick_your_battles" => Ok(Mood::PickYourBattles),
            other => Err(ValidationError::invalid_format(
                "mood",
                format!("unknown mood '{}'", other),
            )),
        }
    }
}

/// Trims, de-duplicates and validates symptom tags, keeping first-seen order.
pub fn normalize_symptoms<I, S>(tags: I) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut symptoms: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return Err(ValidationError::empty_field("symptoms"));
        }
        ValidationError::check_length("symptoms", Some(tag), MAX_SYMPTOM_LENGTH)?;
        if !symptoms.iter().any(|existing| existing == tag) {
            symptoms.push(tag.to_string());
        }
    }
    Ok(symptoms)
}

/// Observations for one day. `None` leaves a field untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyLogUpdate {
    pub mood: Option<Mood>,
    pub energy_level: Option<i32>,
    pub symptoms: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl DailyLogUpdate {
    fn validate(&self) -> Result<Option<Vec<String>>, ValidationError> {
        if let Some(energy) = self.energy_level {
            ValidationError::check_range("energy_level", energy, ENERGY_MIN, ENERGY_MAX)?;
        }
        ValidationError::check_length("notes", self.notes.as_deref(), MAX_NOTES_LENGTH)?;
        self.symptoms.as_ref().map(normalize_symptoms).transpose()
    }
}

/// One daily check-in, unique per partner and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    id: DailyLogId,
    partner_id: PartnerId,
    log_date: NaiveDate,
    mood: Option<Mood>,
    energy_level: Option<i32>,
    symptoms: Vec<String>,
    notes: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DailyLog {
    pub fn new(
        partner_id: PartnerId,
        log_date: NaiveDate,
        fields: DailyLogUpdate,
    ) -> Result<Self, ValidationError> {
        ValidationError::check_date("log_date", log_date)?;
        let symptoms = fields.validate()?.unwrap_or_default();
        let now = Timestamp::now();
        Ok(Self {
            id: DailyLogId::new(),
            partner_id,
            log_date,
            mood: fields.mood,
            energy_level: fields.energy_level,
            symptoms,
            notes: fields.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a log from storage without validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DailyLogId,
        partner_id: PartnerId,
        log_date: NaiveDate,
        mood: Option<Mood>,
        energy_level: Option<i32>,
        symptoms: Vec<String>,
        notes: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            partner_id,
            log_date,
            mood,
            energy_level,
            symptoms,
            notes,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &DailyLogId {
        &self.id
    }

    pub fn partner_id(&self) -> &PartnerId {
        &self.partner_id
    }

    pub fn log_date(&self) -> NaiveDate {
        self.log_date
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn energy_level(&self) -> Option<i32> {
        self.energy_level
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Applies a partial update; nothing changes if validation fails.
    pub fn apply(&mut self, update: DailyLogUpdate) -> Result<(), ValidationError> {
        let symptoms = update.validate()?;

        if let Some(mood) = update.mood {
            self.mood = Some(mood);
        }
        if let Some(energy) = update.energy_level {
            self.energy_level = Some(energy);
        }
        if let Some(symptoms) = symptoms {
            self.symptoms = symptoms;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn symptoms_are_trimmed_and_deduplicated_in_order() {
        let symptoms = normalize_symptoms(["cramps", " tired ", "cramps", "bloated"]).unwrap();
        assert_eq!(symptoms, vec!["cramps", "tired", "bloated"]);
    }

    #[test]
    fn blank_symptom_is_rejected() {
        let err = normalize_symptoms(["cramps", "  "]).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("symptoms"));
    }

    #[test]
    fn new_log_validates_energy_range() {
        let err = DailyLog::new(
            PartnerId::new(),
            date(2025, 1, 3),
            DailyLogUpdate {
                energy_level: Some(6),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), "energy_level");
    }

    #[test]
    fn new_log_rejects_date_outside_supported_years() {
        let err = DailyLog::new(
            PartnerId::new(),
            date(1850, 6, 1),
            DailyLogUpdate::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), "log_date");
    }

    #[test]
    fn new_log_defaults_to_no_symptoms() {
        let log = DailyLog::new(
            PartnerId::new(),
            date(2025, 1, 3),
            DailyLogUpdate {
                mood: Some(Mood::Meh),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(log.symptoms().is_empty());
        assert_eq!(log.mood(), Some(Mood::Meh));
    }

    #[test]
    fn apply_replaces_symptoms_and_keeps_other_fields() {
        let mut log = DailyLog::new(
            PartnerId::new(),
            date(2025, 1, 3),
            DailyLogUpdate {
                mood: Some(Mood::Rough),
                energy_level: Some(2),
                symptoms: Some(vec!["cramps".to_string()]),
                notes: None,
            },
        )
        .unwrap();

        log.apply(DailyLogUpdate {
            symptoms: Some(vec!["headache".to_string(), "headache".to_string()]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(log.symptoms(), ["headache".to_string()]);
        assert_eq!(log.mood(), Some(Mood::Rough));
        assert_eq!(log.energy_level(), Some(2));
    }

    #[test]
    fn apply_is_atomic_on_failure() {
        let mut log =
            DailyLog::new(PartnerId::new(), date(2025, 1, 3), DailyLogUpdate::default()).unwrap();

        let result = log.apply(DailyLogUpdate {
            mood: Some(Mood::Great),
            notes: Some("n".repeat(MAX_NOTES_LENGTH + 1)),
            ..Default::default()
        });

        assert!(result.is_err());
        assert!(log.mood().is_none());
    }

    #[test]
    fn mood_wire_names_round_trip() {
        assert_eq!(
            serde_json::to_string(&Mood::PickYourBattles).unwrap(),
            "\"pick_your_battles\""
        );
        assert_eq!("just_nod".parse::<Mood>().unwrap(), Mood::JustNod);
    }

    #[test]
    fn mood_order_follows_declaration() {
        assert!(Mood::Great < Mood::Good);
        assert!(Mood::JustNod < Mood::PickYourBattles);
    }
}
