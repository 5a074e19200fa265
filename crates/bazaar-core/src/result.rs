//! Convenience result type alias for the Bazaar admin dashboard.

use crate::error::AppError;

/// A specialized `Result` type for operations that can fail with [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
