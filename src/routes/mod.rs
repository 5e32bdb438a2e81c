//! Service-level route handlers

pub mod health;

use crate::error::AppError;

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
