//! User profile as persisted after a successful backend round trip.

use medikart_core::{Email, Phone};
use serde::{Deserialize, Serialize};

/// The logged-in user's profile.
///
/// Written to storage verbatim on login; the store performs no validation
/// here because the profile only exists after the backend accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Verified phone number (OTP flow).
    pub phone: Phone,
    /// Email, when the user provided one at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Delivery address free-text, when saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
