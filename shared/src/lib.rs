//! Shared types for the workforce records server
//!
//! Entity models, request/response DTOs, report output types and small
//! time utilities used by both the server and any future clients.
//!
//! The `db` feature gates the `sqlx::FromRow` derives so consumers that
//! only need the wire types do not pull in the database stack.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
