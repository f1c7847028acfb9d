//! Integration tests for MediKart.
//!
//! The suites under `tests/` exercise the storefront crates together the
//! way the application uses them: a cart/session store over real
//! file-backed storage, torn down and reconstructed to simulate app
//! restarts.
//!
//! # Test Categories
//!
//! - `cart_persistence` - cart snapshots surviving reloads, merge and
//!   normalization scenarios
//! - `session_flow` - login/logout/token restoration through `AppState`
//!
//! Everything runs self-contained against temp files; no backend service
//! is required.

use std::path::PathBuf;

/// A unique storage-file path under the system temp directory.
///
/// Callers remove the file themselves; collisions are prevented by the
/// UUID suffix so suites can run in parallel.
#[must_use]
pub fn temp_storage_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("medikart-it-{tag}-{}.json", uuid::Uuid::new_v4()))
}
