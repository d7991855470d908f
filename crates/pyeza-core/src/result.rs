//! Convenience result type alias for pyeza.

use crate::error::AppError;

/// A specialized `Result` type for pyeza operations.
pub type AppResult<T> = Result<T, AppError>;
