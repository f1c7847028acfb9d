//! Cart line model and product price normalization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::product::{PriceRole, ProductId};

/// A raw catalog payload reduced to the fields the cart cares about.
///
/// Produced by [`NormalizedProduct::from_value`], which applies the price
/// fallback chain so every product entering the cart has a usable price
/// regardless of how sparse or misspelled the upstream payload was:
///
/// - `price` = regular price, else MRP, else zero
/// - `discount_price` = discount price, else `price` (always set)
/// - `mrp` stays absent when nothing parseable was present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedProduct {
    /// Derived stable identifier (see [`ProductId::derive`]).
    pub id: ProductId,
    /// Display name, passed through unmodified.
    pub name: Option<String>,
    /// Product image URL, passed through unmodified.
    pub image: Option<String>,
    /// Brand or manufacturer, passed through unmodified.
    pub brand: Option<String>,
    /// Maximum retail price, when one parsed.
    pub mrp: Option<Decimal>,
    /// Regular price after fallback.
    pub price: Decimal,
    /// Effective selling price after fallback.
    pub discount_price: Decimal,
}

impl NormalizedProduct {
    /// Normalize a raw product payload.
    ///
    /// Never fails: missing or unparseable price fields degrade through the
    /// fallback chain down to zero, and a payload with no identifying field
    /// derives the empty id.
    #[must_use]
    pub fn from_value(product: &Value) -> Self {
        let mrp = PriceRole::Mrp.extract(product);
        let price = PriceRole::Regular
            .extract(product)
            .or(mrp)
            .unwrap_or(Decimal::ZERO);
        let discount_price = PriceRole::Discount.extract(product).unwrap_or(price);

        Self {
            id: ProductId::derive(product),
            name: string_field(product, "name"),
            image: string_field(product, "image"),
            brand: string_field(product, "brand"),
            mrp,
            price,
            discount_price,
        }
    }
}

fn string_field(product: &Value, field: &str) -> Option<String> {
    product
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// One entry in the cart.
///
/// The serde shape is the persisted snapshot format. Older snapshots may
/// predate `discount_price`, so it stays optional on the wire; reads fall
/// back to `price` via [`CartLine::unit_price`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable derived identifier; at most one line exists per id.
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Maximum retail price, kept for display strike-throughs only;
    /// never contributes to totals.
    #[serde(default)]
    pub mrp: Option<Decimal>,
    /// Normalized regular price.
    #[serde(default)]
    pub price: Decimal,
    /// Normalized effective price; absent only in pre-normalization
    /// persisted snapshots.
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    /// Positive line quantity.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl CartLine {
    /// Build a fresh line from a normalized product.
    #[must_use]
    pub fn new(product: NormalizedProduct, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            brand: product.brand,
            mrp: product.mrp,
            price: product.price,
            discount_price: Some(product.discount_price),
            quantity: quantity.max(1),
        }
    }

    /// The price one unit of this line sells for.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}
