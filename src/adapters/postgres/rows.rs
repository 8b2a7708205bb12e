//! Row decoding helpers shared by the PostgreSQL repositories.

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reads a typed column, mapping decode failures to `DatabaseError`.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

/// Parses a TEXT enum column through the type's `FromStr`.
pub(super) fn parse_column<T>(value: &str, name: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr,
{
    value.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {}: {}", name, value),
        )
    })
}

/// True when a statement failed on a UNIQUE constraint.
pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
