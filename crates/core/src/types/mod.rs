//! Core types for MediKart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod contact;
pub mod money;
pub mod product;

pub use cart::{CartLine, NormalizedProduct};
pub use contact::{Email, EmailError, Phone, PhoneError};
pub use money::{parse_money, parse_money_or_default};
pub use product::{PriceRole, ProductId};
