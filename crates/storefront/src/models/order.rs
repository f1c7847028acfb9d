//! Order types for checkout and order history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of an order, snapshotted from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog id of the medicine.
    pub medicine_id: String,
    /// Name at the time of purchase.
    pub name: String,
    /// Unit price charged.
    pub unit_price: Decimal,
    /// Quantity ordered.
    pub quantity: u32,
}

/// Payload for placing an order.
///
/// The backend recomputes pricing authoritatively; `total` is sent for
/// display-consistency checks only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    /// Delivery address free-text.
    pub address: String,
    /// Client-side total at the time of checkout.
    pub total: Decimal,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    /// Backend-owned status string (e.g. "placed", "shipped").
    pub status: String,
    pub created_at: DateTime<Utc>,
}
