//! Red Recon - partner cycle tracking service
//!
//! Tracks a partner's menstrual cycle from logged periods and daily
//! check-ins, and derives phases, forecasts, calendars and patterns.
//!
//! Layout follows ports and adapters:
//! - `domain` - aggregates and the pure cycle engine
//! - `ports` - repository and session-validation traits
//! - `application` - command and query handlers
//! - `adapters` - PostgreSQL, in-memory, JWT and axum implementations

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
