//! Catalog and tracked-medicine types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A medicine as returned by the catalog endpoints.
///
/// This is the *typed* catalog shape used by list/search/detail views. Cart
/// insertion deliberately does not go through it: `add_to_cart` takes the
/// raw JSON payload so that price normalization can see every upstream
/// field spelling (see `medikart_core::PriceRole`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Catalog id.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Printed maximum retail price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrp: Option<Decimal>,
    /// Regular selling price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Discounted selling price, when one is active.
    #[serde(
        default,
        alias = "discountPrice",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_price: Option<Decimal>,
    /// Whether a prescription upload is required at checkout.
    #[serde(default, alias = "prescriptionRequired")]
    pub prescription_required: bool,
}

/// A medicine the user tracks on their profile (refill reminders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMedicine {
    /// Backend id of the tracking entry.
    #[serde(alias = "_id")]
    pub id: String,
    /// Medicine name as entered or picked from the catalog.
    pub name: String,
    /// Dosage free-text (e.g. "500mg twice daily").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    /// Days between refills, when the user set a reminder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill_interval_days: Option<u32>,
}

/// Payload for creating or updating a tracked medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserMedicine {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill_interval_days: Option<u32>,
}
