//! Historical pattern mining over period and daily logs.

use serde::Serialize;
use std::collections::BTreeMap;

use super::partner_config::PartnerConfig;
use super::resolver::phase_for;
use super::phase::CyclePhase;
use crate::domain::daily_log::{DailyLog, Mood};
use crate::domain::period_log::PeriodLog;

/// Most symptom tags reported per phase.
pub const MAX_SYMPTOMS_PER_PHASE: usize = 5;

/// Aggregated trends. Phase-keyed maps only contain phases with data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyclePattern {
    pub average_cycle_length: f64,
    pub cycle_length_range: (i32, i32),
    pub average_period_length: f64,
    pub common_symptoms_by_phase: BTreeMap<CyclePhase, Vec<String>>,
    pub mood_trends_by_phase: BTreeMap<CyclePhase, Mood>,
}

/// Summarizes history into averages and per-phase trends.
///
/// `period_logs` should be the most recent actual logs; predicted entries
/// are ignored. `daily_logs` are expected most recent first, which decides
/// the order of symptom tags. Daily logs dated before `last_period_start`
/// are skipped.
pub fn analyze_patterns(
    config: &PartnerConfig,
    period_logs: &[PeriodLog],
    daily_logs: &[DailyLog],
) -> CyclePattern {
    let actual: Vec<&PeriodLog> = period_logs.iter().filter(|l| !l.is_predicted()).collect();

    let cycle_lengths: Vec<i32> = actual.iter().filter_map(|l| l.cycle_length()).collect();
    let configured_cycle = config.cycle_length();
    let (average_cycle_length, cycle_length_range) = match (
        cycle_lengths.iter().min(),
        cycle_lengths.iter().max(),
    ) {
        (Some(min), Some(max)) => (mean(cycle_lengths.iter().map(|v| i64::from(*v))), (*min, *max)),
        _ => (f64::from(configured_cycle), (configured_cycle, configured_cycle)),
    };

    let period_lengths: Vec<i64> = actual.iter().filter_map(|l| l.recorded_length()).collect();
    let average_period_length = if period_lengths.is_empty() {
        f64::from(config.period_length())
    } else {
        mean(period_lengths.iter().copied())
    };

    let mut symptoms: BTreeMap<CyclePhase, Vec<String>> = BTreeMap::new();
    let mut mood_counts: BTreeMap<CyclePhase, BTreeMap<Mood, u32>> = BTreeMap::new();

    if let Some(last_start) = config.last_period_start() {
        for log in daily_logs {
            let phase = phase_for(Some(last_start), configured_cycle, log.log_date());
            if phase == CyclePhase::Unknown {
                continue;
            }

            if !log.symptoms().is_empty() {
                let seen = symptoms.entry(phase).or_default();
                for tag in log.symptoms() {
                    if seen.len() < MAX_SYMPTOMS_PER_PHASE && !seen.contains(tag) {
                        seen.push(tag.clone());
                    }
                }
            }

            if let Some(mood) = log.mood() {
                *mood_counts.entry(phase).or_default().entry(mood).or_insert(0) += 1;
            }
        }
    }

    let mood_trends_by_phase = mood_counts
        .into_iter()
        .filter_map(|(phase, counts)| most_frequent(&counts).map(|mood| (phase, mood)))
        .collect();

    CyclePattern {
        average_cycle_length: round_to_tenth(average_cycle_length),
        cycle_length_range,
        average_period_length: round_to_tenth(average_period_length),
        common_symptoms_by_phase: symptoms,
        mood_trends_by_phase,
    }
}

/// Highest count wins; ties go to the mood declared first.
fn most_frequent(counts: &BTreeMap<Mood, u32>) -> Option<Mood> {
    let mut best: Option<(Mood, u32)> = None;
    for (mood, count) in counts {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((*mood, *count)),
        }
    }
    best.map(|(mood, _)| mood)
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, n) = values.fold((0i64, 0i64), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::daily_log::DailyLogUpdate;
    use crate::domain::foundation::PartnerId;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily(partner: PartnerId, on: NaiveDate, mood: Option<Mood>, tags: &[&str]) -> DailyLog {
        DailyLog::new(
            partner,
            on,
            DailyLogUpdate {
                mood,
                symptoms: Some(tags.iter().map(|t| t.to_string()).collect()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn no_history_falls_back_to_configuration() {
        let config = PartnerConfig::new(30, 4, None).unwrap();
        let pattern = analyze_patterns(&config, &[], &[]);

        assert_eq!(pattern.average_cycle_length, 30.0);
        assert_eq!(pattern.cycle_length_range, (30, 30));
        assert_eq!(pattern.average_period_length, 4.0);
        assert!(pattern.common_symptoms_by_phase.is_empty());
        assert!(pattern.mood_trends_by_phase.is_empty());
    }

    #[test]
    fn averages_recorded_lengths() {
        let partner = PartnerId::new();
        let logs = vec![
            PeriodLog::actual(partner, date(2025, 3, 27), Some(date(2025, 3, 31)), None, None, Some(29))
                .unwrap(),
            PeriodLog::actual(partner, date(2025, 2, 26), Some(date(2025, 3, 1)), None, None, Some(27))
                .unwrap(),
            PeriodLog::actual(partner, date(2025, 1, 29), None, None, None, Some(28)).unwrap(),
            PeriodLog::predicted(partner, date(2025, 4, 25), 7),
        ];
        let config = PartnerConfig::new(28, 5, Some(date(2025, 3, 27))).unwrap();

        let pattern = analyze_patterns(&config, &logs, &[]);

        assert_eq!(pattern.average_cycle_length, 28.0);
        assert_eq!(pattern.cycle_length_range, (27, 29));
        // 5 and 4 days; the open-ended and predicted logs do not count.
        assert_eq!(pattern.average_period_length, 4.5);
    }

    #[test]
    fn averages_are_rounded_to_one_decimal() {
        let partner = PartnerId::new();
        let logs: Vec<PeriodLog> = [28, 28, 29]
            .iter()
            .map(|len| PeriodLog::actual(partner, date(2025, 1, 1), None, None, None, Some(*len)).unwrap())
            .collect();

        let pattern = analyze_patterns(&PartnerConfig::default(), &logs, &[]);
        assert_eq!(pattern.average_cycle_length, 28.3);
    }

    #[test]
    fn groups_symptoms_and_moods_by_phase() {
        let partner = PartnerId::new();
        let config = PartnerConfig::new(28, 5, Some(date(2025, 1, 1))).unwrap();
        // Most recent first.
        let logs = vec![
            daily(partner, date(2025, 1, 20), Some(Mood::Rough), &["cravings", "bloated"]),
            daily(partner, date(2025, 1, 18), Some(Mood::Rough), &["moody"]),
            daily(partner, date(2025, 1, 17), Some(Mood::Meh), &["bloated"]),
            daily(partner, date(2025, 1, 3), Some(Mood::JustNod), &["cramps", "tired"]),
            daily(partner, date(2025, 1, 2), None, &["cramps", "headache"]),
        ];

        let pattern = analyze_patterns(&config, &[], &logs);

        assert_eq!(
            pattern.common_symptoms_by_phase[&CyclePhase::Luteal],
            vec!["cravings", "bloated", "moody"]
        );
        assert_eq!(
            pattern.common_symptoms_by_phase[&CyclePhase::Menstrual],
            vec!["cramps", "tired", "headache"]
        );
        assert_eq!(pattern.mood_trends_by_phase[&CyclePhase::Luteal], Mood::Rough);
        assert_eq!(pattern.mood_trends_by_phase[&CyclePhase::Menstrual], Mood::JustNod);
        assert!(!pattern.mood_trends_by_phase.contains_key(&CyclePhase::Follicular));
    }

    #[test]
    fn caps_symptoms_at_five_per_phase() {
        let partner = PartnerId::new();
        let config = PartnerConfig::new(28, 5, Some(date(2025, 1, 1))).unwrap();
        let logs = vec![
            daily(partner, date(2025, 1, 2), None, &["a", "b", "c", "d"]),
            daily(partner, date(2025, 1, 1), None, &["e", "f", "a"]),
        ];

        let pattern = analyze_patterns(&config, &[], &logs);
        assert_eq!(
            pattern.common_symptoms_by_phase[&CyclePhase::Menstrual],
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn mood_ties_break_by_declaration_order() {
        let partner = PartnerId::new();
        let config = PartnerConfig::new(28, 5, Some(date(2025, 1, 1))).unwrap();
        let logs = vec![
            daily(partner, date(2025, 1, 4), Some(Mood::PickYourBattles), &[]),
            daily(partner, date(2025, 1, 3), Some(Mood::Good), &[]),
            daily(partner, date(2025, 1, 2), Some(Mood::PickYourBattles), &[]),
            daily(partner, date(2025, 1, 1), Some(Mood::Good), &[]),
        ];

        let pattern = analyze_patterns(&config, &[], &logs);
        assert_eq!(pattern.mood_trends_by_phase[&CyclePhase::Menstrual], Mood::Good);
    }

    #[test]
    fn logs_before_last_start_are_ignored() {
        let partner = PartnerId::new();
        let config = PartnerConfig::new(28, 5, Some(date(2025, 2, 1))).unwrap();
        let logs = vec![daily(partner, date(2025, 1, 20), Some(Mood::Great), &["cramps"])];

        let pattern = analyze_patterns(&config, &[], &logs);
        assert!(pattern.common_symptoms_by_phase.is_empty());
        assert!(pattern.mood_trends_by_phase.is_empty());
    }

    #[test]
    fn phase_keys_serialize_lowercase() {
        let partner = PartnerId::new();
        let config = PartnerConfig::new(28, 5, Some(date(2025, 1, 1))).unwrap();
        let logs = vec![daily(partner, date(2025, 1, 1), Some(Mood::Meh), &["cramps"])];

        let json = serde_json::to_value(analyze_patterns(&config, &[], &logs)).unwrap();
        assert_eq!(json["common_symptoms_by_phase"]["menstrual"][0], "cramps");
        assert_eq!(json["mood_trends_by_phase"]["menstrual"], "meh");
        assert_eq!(json["cycle_length_range"], serde_json::json!([28, 28]));
    }
}
