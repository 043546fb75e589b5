//! Repository Module
//!
//! CRUD operations over the SQLite tables, as free functions taking the
//! connection pool. Cross-entity integrity (foreign-key existence,
//! salary uniqueness, restrict-on-delete guards) is checked here before
//! any write; the schema constraints back the same rules as the hard
//! stop for racing writers.

pub mod department;
pub mod employee;
pub mod salary;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Reference: {0}")]
    Reference(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// True when the error is a UNIQUE constraint violation.
///
/// Used to translate a storage-level uniqueness backstop (a racing
/// writer slipping past the application pre-check) into the same
/// conflict error the pre-check would have produced.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
