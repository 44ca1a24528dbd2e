//! Convenience result type alias for VenueHub.

use crate::error::AppError;

/// A specialized `Result` type for VenueHub operations.
pub type AppResult<T> = Result<T, AppError>;
