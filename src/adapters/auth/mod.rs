//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 shared-secret validation for production
//! - `mock` - Fixed token map for tests and local development

mod jwt;
mod mock;

pub use jwt::{AccessClaims, JwtConfig, JwtSessionValidator};
pub use mock::MockSessionValidator;
