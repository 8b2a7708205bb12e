//! Application layer - command and query handlers.
//!
//! Writes (partner profile, period logs, daily logs) go through command
//! handlers that log with a correlation id; the cycle views are read-only
//! query handlers over the engine.

pub mod handlers;
