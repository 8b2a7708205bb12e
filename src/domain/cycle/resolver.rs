//! Maps calendar dates onto cycle days.

use chrono::NaiveDate;

use super::phase::{phase_of, CyclePhase};

/// Days from `last_period_start` to `target`, counting the start day as 1.
///
/// Zero or negative means `target` precedes the recorded start.
pub fn days_since(last_period_start: NaiveDate, target: NaiveDate) -> i64 {
    (target - last_period_start).num_days() + 1
}

/// Cycle day of `target`, wrapping every `cycle_length` days.
///
/// Returns `None` for dates before `last_period_start` or a non-positive
/// cycle length.
pub fn cycle_day_for(
    last_period_start: NaiveDate,
    cycle_length: i32,
    target: NaiveDate,
) -> Option<i32> {
    let since = days_since(last_period_start, target);
    if since < 1 || cycle_length <= 0 {
        return None;
    }
    let day = (since - 1).rem_euclid(i64::from(cycle_length)) + 1;
    i32::try_from(day).ok()
}

/// Phase of `target`, or `Unknown` when no cycle day can be resolved.
pub fn phase_for(
    last_period_start: Option<NaiveDate>,
    cycle_length: i32,
    target: NaiveDate,
) -> CyclePhase {
    last_period_start
        .and_then(|start| cycle_day_for(start, cycle_length, target))
        .map(|day| phase_of(day, cycle_length))
        .unwrap_or(CyclePhase::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_day_is_cycle_day_one() {
        let start = date(2025, 1, 1);
        assert_eq!(days_since(start, start), 1);
        assert_eq!(cycle_day_for(start, 28, start), Some(1));
    }

    #[test]
    fn mid_january_is_ovulation_day_fifteen() {
        let start = date(2025, 1, 1);
        let target = date(2025, 1, 15);
        assert_eq!(cycle_day_for(start, 28, target), Some(15));
        assert_eq!(phase_for(Some(start), 28, target), CyclePhase::Ovulation);
    }

    #[test]
    fn wraps_after_cycle_length() {
        let start = date(2025, 1, 1);
        assert_eq!(cycle_day_for(start, 28, date(2025, 1, 28)), Some(28));
        assert_eq!(cycle_day_for(start, 28, date(2025, 1, 29)), Some(1));
        assert_eq!(cycle_day_for(start, 28, date(2025, 2, 26)), Some(1));
    }

    #[test]
    fn dates_before_start_have_no_cycle_day() {
        let start = date(2025, 1, 10);
        assert_eq!(days_since(start, date(2025, 1, 9)), 0);
        assert_eq!(cycle_day_for(start, 28, date(2025, 1, 9)), None);
        assert_eq!(
            phase_for(Some(start), 28, date(2024, 12, 1)),
            CyclePhase::Unknown
        );
    }

    #[test]
    fn missing_start_is_unknown() {
        assert_eq!(phase_for(None, 28, date(2025, 1, 1)), CyclePhase::Unknown);
    }

    proptest! {
        #[test]
        fn cycle_day_is_periodic(
            cycle_length in 21i32..=35,
            offset in 0i64..2000,
        ) {
            let start = date(2024, 6, 1);
            let target = start + Duration::days(offset);
            let next = target + Duration::days(i64::from(cycle_length));
            prop_assert_eq!(
                cycle_day_for(start, cycle_length, target),
                cycle_day_for(start, cycle_length, next)
            );
        }

        #[test]
        fn cycle_day_stays_in_range(
            cycle_length in 21i32..=35,
            offset in 0i64..2000,
        ) {
            let start = date(2024, 6, 1);
            let day = cycle_day_for(start, cycle_length, start + Duration::days(offset)).unwrap();
            prop_assert!(day >= 1 && day <= cycle_length);
        }
    }
}
