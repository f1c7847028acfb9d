//! Vendor onboarding form payload.

use medikart_core::{Email, Phone};
use serde::{Deserialize, Serialize};

/// Application submitted through the vendor-onboarding form.
///
/// Review and approval happen entirely on the backend; the storefront only
/// validates the contact fields client-side before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorApplication {
    /// Legal business name.
    pub business_name: String,
    /// Contact person.
    pub contact_name: String,
    pub phone: Phone,
    pub email: Email,
    /// Drug license number (required for pharmacies).
    pub license_number: String,
    /// Free-text address of the business.
    pub address: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let application = VendorApplication {
            business_name: "Sharma Medicos".into(),
            contact_name: "R. Sharma".into(),
            phone: "+919812345678".parse().unwrap(),
            email: "contact@sharmamedicos.example".parse().unwrap(),
            license_number: "DL-20B-12345".into(),
            address: "14 MG Road, Pune".into(),
        };
        let json = serde_json::to_value(&application).unwrap();
        assert_eq!(json["phone"], "+919812345678");
        assert_eq!(json["license_number"], "DL-20B-12345");
    }
}
