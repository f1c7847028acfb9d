//! Product identity and price-role field lookup.
//!
//! Upstream catalog payloads are inconsistently shaped: some responses key
//! products by `id`, others by `_id` or `product_id`, and a few carry only
//! a name. Price fields are worse - the same semantic amount appears under
//! a handful of spellings and capitalizations. Both problems are handled
//! here with fixed, ordered candidate-field tables rather than reflection:
//! the first present field wins.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::money::parse_money;

/// Identifying fields checked in priority order when deriving a
/// [`ProductId`].
const ID_FIELDS: &[&str] = &["id", "_id", "product_id", "name"];

/// A stable product identifier used for cart dedup and merge.
///
/// Derived from whichever identifying field the upstream payload happens to
/// carry; two payloads describing the same product must derive the same id
/// for cart merging to work, so the candidate order is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an already-known identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the identifier from a raw product payload.
    ///
    /// Takes the first present of `id`, `_id`, `product_id`, then `name`.
    /// JSON numbers are stringified. When no identifying field is present
    /// the id degrades to the empty string; such lines all merge together,
    /// which keeps cart insertion free of failure modes.
    #[must_use]
    pub fn derive(product: &Value) -> Self {
        for field in ID_FIELDS {
            match product.get(field) {
                Some(Value::String(s)) if !s.is_empty() => return Self(s.clone()),
                Some(Value::Number(n)) => return Self(n.to_string()),
                _ => {}
            }
        }
        Self(String::new())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The three semantic price roles a catalog payload may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRole {
    /// Maximum retail price (the printed strike-through price).
    Mrp,
    /// Regular selling price.
    Regular,
    /// Discounted / member / sale price, when one exists.
    Discount,
}

impl PriceRole {
    /// Candidate field names for this role, in priority order.
    #[must_use]
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Mrp => &["mrp", "MRP", "Mrp", "maxRetailPrice", "max_retail_price"],
            Self::Regular => &[
                "price",
                "Price",
                "regularPrice",
                "regular_price",
                "basePrice",
                "base_price",
            ],
            Self::Discount => &[
                "discountPrice",
                "discount_price",
                "discountedPrice",
                "memberPrice",
                "member_price",
                "salePrice",
                "sale_price",
                "sellingPrice",
                "selling_price",
            ],
        }
    }

    /// Extract this role's amount from a raw product payload.
    ///
    /// Scans the candidate fields in order and returns the first one that
    /// both exists and parses as money. A field that is present but
    /// unparseable is treated as absent and the scan continues.
    #[must_use]
    pub fn extract(self, product: &Value) -> Option<Decimal> {
        self.candidates()
            .iter()
            .filter_map(|field| product.get(field))
            .find_map(parse_money)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derive_prefers_id() {
        let p = json!({"id": "med-1", "_id": "x", "name": "Paracetamol"});
        assert_eq!(ProductId::derive(&p).as_str(), "med-1");
    }

    #[test]
    fn test_derive_underscore_id() {
        let p = json!({"_id": "abc123", "name": "Paracetamol"});
        assert_eq!(ProductId::derive(&p).as_str(), "abc123");
    }

    #[test]
    fn test_derive_product_id_field() {
        let p = json!({"product_id": 42, "name": "Paracetamol"});
        assert_eq!(ProductId::derive(&p).as_str(), "42");
    }

    #[test]
    fn test_derive_falls_back_to_name() {
        let p = json!({"name": "Paracetamol"});
        assert_eq!(ProductId::derive(&p).as_str(), "Paracetamol");
    }

    #[test]
    fn test_derive_nothing_present() {
        let p = json!({"brand": "Acme"});
        assert_eq!(ProductId::derive(&p).as_str(), "");
    }

    #[test]
    fn test_derive_skips_empty_string_id() {
        let p = json!({"id": "", "name": "Paracetamol"});
        assert_eq!(ProductId::derive(&p).as_str(), "Paracetamol");
    }

    #[test]
    fn test_extract_first_candidate_wins() {
        let p = json!({"discountPrice": 35, "salePrice": 30});
        assert_eq!(
            PriceRole::Discount.extract(&p),
            Some(Decimal::from(35))
        );
    }

    #[test]
    fn test_extract_capitalization_variants() {
        let p = json!({"MRP": "₹50.00"});
        assert_eq!(PriceRole::Mrp.extract(&p), Some("50.00".parse().unwrap()));
    }

    #[test]
    fn test_extract_unparseable_field_is_skipped() {
        let p = json!({"price": "call us", "regularPrice": 40});
        assert_eq!(PriceRole::Regular.extract(&p), Some(Decimal::from(40)));
    }

    #[test]
    fn test_extract_absent() {
        let p = json!({"name": "Paracetamol"});
        assert_eq!(PriceRole::Discount.extract(&p), None);
    }
}
