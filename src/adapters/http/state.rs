//! Application state: repositories wired into every module's handlers.

use std::sync::Arc;

use crate::application::handlers::cycle::{
    GetCalendarMonthHandler, GetCurrentStatusHandler, GetCyclePatternsHandler,
    GetPhaseTableHandler,
};
use crate::application::handlers::daily_log::{
    CreateDailyLogHandler, DeleteDailyLogHandler, GetDailyLogHandler, ListDailyLogRangeHandler,
    ListDailyLogsHandler, UpdateDailyLogHandler,
};
use crate::application::handlers::partner::{
    CreatePartnerHandler, DeletePartnerHandler, GetPartnerHandler, UpdatePartnerHandler,
};
use crate::application::handlers::period_log::{
    CreatePeriodLogHandler, DeletePeriodLogHandler, GetPeriodLogHandler, ListPeriodLogsHandler,
    UpdatePeriodLogHandler,
};
use crate::config::TrackingConfig;
use crate::domain::cycle::TipSource;
use crate::ports::{DailyLogRepository, PartnerRepository, PeriodLogRepository};

use super::cycle::CycleHandlers;
use super::daily_log::DailyLogHandlers;
use super::partner::PartnerHandlers;
use super::period_log::PeriodLogHandlers;

/// Storage behind the API.
#[derive(Clone)]
pub struct Repositories {
    pub partners: Arc<dyn PartnerRepository>,
    pub period_logs: Arc<dyn PeriodLogRepository>,
    pub daily_logs: Arc<dyn DailyLogRepository>,
}

impl Repositories {
    /// All three ports served by one store.
    pub fn from_store<S>(store: S) -> Self
    where
        S: PartnerRepository + PeriodLogRepository + DailyLogRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            partners: store.clone(),
            period_logs: store.clone(),
            daily_logs: store,
        }
    }
}

/// Handler state for every API module.
#[derive(Clone)]
pub struct ApiHandlers {
    pub partners: PartnerHandlers,
    pub period_logs: PeriodLogHandlers,
    pub daily_logs: DailyLogHandlers,
    pub cycle: CycleHandlers,
}

impl ApiHandlers {
    pub fn new(repos: &Repositories, tips: Arc<dyn TipSource>, tracking: &TrackingConfig) -> Self {
        let Repositories {
            partners,
            period_logs,
            daily_logs,
        } = repos;

        let partner_handlers = PartnerHandlers::new(
            Arc::new(CreatePartnerHandler::new(
                partners.clone(),
                period_logs.clone(),
                tracking.forecast_cycles,
            )),
            Arc::new(GetPartnerHandler::new(partners.clone())),
            Arc::new(UpdatePartnerHandler::new(
                partners.clone(),
                tracking.forecast_cycles,
            )),
            Arc::new(DeletePartnerHandler::new(partners.clone())),
        );

        let period_log_handlers = PeriodLogHandlers::new(
            Arc::new(CreatePeriodLogHandler::new(
                partners.clone(),
                period_logs.clone(),
                tracking.forecast_cycles,
            )),
            Arc::new(ListPeriodLogsHandler::new(partners.clone(), period_logs.clone())),
            Arc::new(GetPeriodLogHandler::new(partners.clone(), period_logs.clone())),
            Arc::new(UpdatePeriodLogHandler::new(partners.clone(), period_logs.clone())),
            Arc::new(DeletePeriodLogHandler::new(partners.clone(), period_logs.clone())),
        );

        let daily_log_handlers = DailyLogHandlers::new(
            Arc::new(CreateDailyLogHandler::new(partners.clone(), daily_logs.clone())),
            Arc::new(ListDailyLogsHandler::new(partners.clone(), daily_logs.clone())),
            Arc::new(ListDailyLogRangeHandler::new(partners.clone(), daily_logs.clone())),
            Arc::new(GetDailyLogHandler::new(partners.clone(), daily_logs.clone())),
            Arc::new(UpdateDailyLogHandler::new(partners.clone(), daily_logs.clone())),
            Arc::new(DeleteDailyLogHandler::new(partners.clone(), daily_logs.clone())),
        );

        let cycle_handlers = CycleHandlers::new(
            Arc::new(GetCurrentStatusHandler::new(partners.clone())),
            Arc::new(GetPhaseTableHandler::new(partners.clone(), tips)),
            Arc::new(GetCalendarMonthHandler::new(
                partners.clone(),
                period_logs.clone(),
                daily_logs.clone(),
                tracking.calendar_period_log_limit,
            )),
            Arc::new(GetCyclePatternsHandler::new(
                partners.clone(),
                period_logs.clone(),
                daily_logs.clone(),
                tracking.pattern_period_log_limit,
                tracking.pattern_daily_log_limit,
            )),
        );

        Self {
            partners: partner_handlers,
            period_logs: period_log_handlers,
            daily_logs: daily_log_handlers,
            cycle: cycle_handlers,
        }
    }
}
