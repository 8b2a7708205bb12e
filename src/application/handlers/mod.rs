//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cycle;
pub mod daily_log;
pub mod partner;
pub mod period_log;

#[cfg(test)]
pub(crate) mod testing;
