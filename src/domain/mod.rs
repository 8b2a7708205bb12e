//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `partner` - The tracked partner's profile and cycle settings
//! - `period_log` - Actual and forecast periods, cycle-length recording
//! - `daily_log` - Daily mood, energy and symptom check-ins
//! - `cycle` - Pure phase/prediction engine over the above

pub mod cycle;
pub mod daily_log;
pub mod foundation;
pub mod partner;
pub mod period_log;
