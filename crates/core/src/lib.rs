//! MediKart Core - Shared types library.
//!
//! This crate provides common types used across all MediKart components:
//! - `storefront` - Client-side storefront logic (cart, session, API bindings)
//! - `integration-tests` - Cross-crate behavioral tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money parsing, product identity, cart lines, and contact
//!   newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
