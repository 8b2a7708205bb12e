//! Offset pagination shared by the log repositories.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Largest page a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Skip/limit window over a newest-first listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Number of results to skip.
    pub skip: u32,

    /// Maximum number of results to return (1-100).
    pub limit: u32,
}

impl ListOptions {
    pub fn new(skip: u32, limit: u32) -> Result<Self, ValidationError> {
        ValidationError::check_range("limit", limit as i32, 1, MAX_PAGE_LIMIT as i32)?;
        Ok(Self { skip, limit })
    }

    /// First `limit` results.
    pub fn first(limit: u32) -> Self {
        Self {
            skip: 0,
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_must_be_between_one_and_hundred() {
        assert!(ListOptions::new(0, 1).is_ok());
        assert!(ListOptions::new(40, 100).is_ok());
        assert_eq!(ListOptions::new(0, 0).unwrap_err().field(), "limit");
        assert!(ListOptions::new(0, 101).is_err());
    }

    #[test]
    fn first_clamps_limit() {
        assert_eq!(ListOptions::first(500).limit, 100);
        assert_eq!(ListOptions::first(12), ListOptions { skip: 0, limit: 12 });
    }
}
