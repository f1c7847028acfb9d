//! MediKart Storefront - client-side storefront logic.
//!
//! This crate holds everything the storefront's views depend on that is not
//! rendering: the cart/session store (the single source of truth for "what
//! is in the cart" and "is a user logged in"), write-through persistent
//! storage, the backend API bindings, and the shared application state.
//!
//! # Architecture
//!
//! - The cart is purely local: persisted to storage on every mutation,
//!   never synced to the backend.
//! - All business logic (pricing beyond arithmetic, inventory, auth, order
//!   processing) lives in the backend API; this crate only records intent
//!   and displays results.
//! - Stores are explicit values passed by handle, not ambient globals;
//!   tests construct isolated instances.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;

pub use error::{AppError, Result};

/// Install a `tracing` subscriber reading the `RUST_LOG` filter.
///
/// Storefront binaries and test harnesses call this once at startup; the
/// library itself never installs a global subscriber. Returns quietly if a
/// subscriber is already set.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "medikart_storefront=info".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
