//! Vendor onboarding endpoint.

use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::models::VendorApplication;

/// Acknowledgement returned when an application is accepted for review.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorRegistrationReceipt {
    /// Backend reference id for the application.
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Submit a vendor application.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the backend's message when the
    /// license number or contact details are rejected.
    pub async fn register_vendor(
        &self,
        application: &VendorApplication,
    ) -> Result<VendorRegistrationReceipt, ApiError> {
        self.post_json("api/vendors/register", application).await
    }
}
