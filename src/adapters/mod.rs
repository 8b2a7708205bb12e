//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT session validation (and a mock for tests)
//! - `http` - axum REST API
//! - `memory` - in-process repositories for tests and local development
//! - `postgres` - sqlx repositories and migrations

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
