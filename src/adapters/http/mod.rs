//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter (DTOs, handlers, routes);
//! `router` assembles them behind the shared middleware.

pub mod cycle;
pub mod daily_log;
pub mod error;
pub mod middleware;
pub mod partner;
pub mod period_log;
pub mod router;
pub mod state;

pub use cycle::{cycle_routes, CycleHandlers};
pub use daily_log::{daily_log_routes, DailyLogHandlers};
pub use error::ErrorResponse;
pub use partner::{partner_routes, PartnerHandlers};
pub use period_log::{period_log_routes, PeriodLogHandlers};
pub use router::{build_router, RouterSettings};
pub use state::{ApiHandlers, Repositories};
