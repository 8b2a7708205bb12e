//! Period log command and query handlers.

mod create_period_log;
mod delete_period_log;
mod get_period_log;
mod list_period_logs;
mod update_period_log;

pub use create_period_log::{CreatePeriodLogCommand, CreatePeriodLogHandler};
pub use delete_period_log::{DeletePeriodLogCommand, DeletePeriodLogHandler};
pub use get_period_log::{GetPeriodLogHandler, GetPeriodLogQuery};
pub use list_period_logs::{ListPeriodLogsHandler, ListPeriodLogsQuery};
pub use update_period_log::{UpdatePeriodLogCommand, UpdatePeriodLogHandler};
