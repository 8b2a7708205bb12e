//! Daily log command and query handlers.

mod create_daily_log;
mod delete_daily_log;
mod get_daily_log;
mod list_daily_log_range;
mod list_daily_logs;
mod update_daily_log;

pub use create_daily_log::{CreateDailyLogCommand, CreateDailyLogHandler};
pub use delete_daily_log::{DeleteDailyLogCommand, DeleteDailyLogHandler};
pub use get_daily_log::{GetDailyLogHandler, GetDailyLogQuery};
pub use list_daily_log_range::{ListDailyLogRangeHandler, ListDailyLogRangeQuery};
pub use list_daily_logs::{ListDailyLogsHandler, ListDailyLogsQuery};
pub use update_daily_log::{UpdateDailyLogCommand, UpdateDailyLogHandler};
