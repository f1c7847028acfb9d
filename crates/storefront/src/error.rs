//! Unified error handling for the storefront.
//!
//! Store operations themselves never fail (parsing degrades to defaults,
//! bad persisted data degrades to an empty cart - see `store::cart`), so
//! `AppError` only carries the failures of the infrastructure around them:
//! configuration, storage I/O, and backend API calls.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Persistent storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Backend API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
