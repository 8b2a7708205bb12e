//! GetCalendarMonthHandler - Query handler for one month of the calendar.

use std::sync::Arc;

use crate::domain::cycle::{build_calendar, CalendarMonth, CycleError, MonthSpan};
use crate::domain::foundation::UserId;
use crate::ports::{DailyLogRepository, ListOptions, PartnerRepository, PeriodLogRepository};

/// Query for the calendar of `year`-`month`.
#[derive(Debug, Clone)]
pub struct GetCalendarMonthQuery {
    pub user_id: UserId,
    pub year: i32,
    pub month: u32,
}

/// Handler for calendar months.
pub struct GetCalendarMonthHandler {
    partners: Arc<dyn PartnerRepository>,
    period_logs: Arc<dyn PeriodLogRepository>,
    daily_logs: Arc<dyn DailyLogRepository>,
    /// How many of the most recent period logs are drawn on the calendar.
    period_log_limit: u32,
}

impl GetCalendarMonthHandler {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        period_logs: Arc<dyn PeriodLogRepository>,
        daily_logs: Arc<dyn DailyLogRepository>,
        period_log_limit: u32,
    ) -> Self {
        Self {
            partners,
            period_logs,
            daily_logs,
            period_log_limit,
        }
    }

    pub async fn handle(&self, query: GetCalendarMonthQuery) -> Result<CalendarMonth, CycleError> {
        let span = MonthSpan::new(query.year, query.month)
            .ok_or_else(|| CycleError::invalid_month(query.year, query.month))?;

        let partner = self
            .partners
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::partner_not_found(query.user_id.clone()))?;

        let period_logs = self
            .period_logs
            .list_by_partner(partner.id(), &ListOptions::first(self.period_log_limit))
            .await?;
        let daily_logs = self
            .daily_logs
            .list_range(partner.id(), span.first_day(), span.last_day())
            .await?;

        Ok(build_calendar(&partner.config(), span, &period_logs, &daily_logs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::testing::{date, seed_partner, user};
    use crate::domain::cycle::CyclePhase;
    use crate::domain::daily_log::{DailyLog, DailyLogUpdate, Mood};
    use crate::domain::period_log::PeriodLog;
    use crate::ports::PeriodRecording;

    fn handler(store: &InMemoryStore) -> GetCalendarMonthHandler {
        GetCalendarMonthHandler::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            12,
        )
    }

    fn query(year: i32, month: u32) -> GetCalendarMonthQuery {
        GetCalendarMonthQuery {
            user_id: user("user-1"),
            year,
            month,
        }
    }

    #[tokio::test]
    async fn marks_actual_and_projected_days_with_moods() {
        let store = InMemoryStore::new();
        let partner = seed_partner(&store, &user("user-1"), None).await;
        let log = PeriodLog::actual(
            *partner.id(),
            date(2025, 1, 1),
            Some(date(2025, 1, 4)),
            None,
            None,
            None,
        )
        .unwrap();
        PeriodLogRepository::record_actual(
            &store,
            &PeriodRecording {
                log,
                forecasts: vec![],
            },
        )
        .await
        .unwrap();
        let daily = DailyLog::new(
            *partner.id(),
            date(2025, 1, 15),
            DailyLogUpdate {
                mood: Some(Mood::Good),
                ..Default::default()
            },
        )
        .unwrap();
        DailyLogRepository::save(&store, &daily).await.unwrap();

        let month = handler(&store).handle(query(2025, 1)).await.unwrap();

        assert_eq!(month.days.len(), 31);
        let period: Vec<_> = month
            .days
            .iter()
            .filter(|d| d.is_period)
            .map(|d| d.date)
            .collect();
        assert_eq!(
            period,
            vec![date(2025, 1, 1), date(2025, 1, 2), date(2025, 1, 3), date(2025, 1, 4)]
        );
        let predicted: Vec<_> = month
            .days
            .iter()
            .filter(|d| d.is_predicted_period)
            .map(|d| d.date)
            .collect();
        assert_eq!(
            predicted,
            vec![date(2025, 1, 29), date(2025, 1, 30), date(2025, 1, 31)]
        );
        let day15 = &month.days[14];
        assert_eq!(day15.cycle_day, Some(15));
        assert_eq!(day15.phase, CyclePhase::Ovulation);
        assert!(day15.has_daily_log);
        assert_eq!(day15.mood, Some(Mood::Good));
    }

    #[tokio::test]
    async fn empty_history_is_all_unknown() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;

        let month = handler(&store).handle(query(2025, 2)).await.unwrap();

        assert_eq!(month.days.len(), 28);
        assert!(month.days.iter().all(|d| d.phase == CyclePhase::Unknown
            && d.cycle_day.is_none()
            && !d.is_period
            && !d.is_predicted_period));
    }

    #[tokio::test]
    async fn month_thirteen_is_invalid() {
        let store = InMemoryStore::new();
        seed_partner(&store, &user("user-1"), None).await;

        let result = handler(&store).handle(query(2025, 13)).await;

        assert_eq!(result.unwrap_err(), CycleError::invalid_month(2025, 13));
    }
}
