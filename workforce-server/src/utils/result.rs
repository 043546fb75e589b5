use crate::utils::AppError;

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
