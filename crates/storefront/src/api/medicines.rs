//! Medicine catalog endpoints.
//!
//! Detail lookups are cached for five minutes; lists and searches always go
//! to the backend, since their result sets change with inventory.

use super::{ApiClient, ApiError};
use crate::models::Medicine;

impl ApiClient {
    /// Fetch the full catalog listing.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    pub async fn list_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        self.get_json("api/medicines", &[]).await
    }

    /// Search the catalog by name, brand, or composition.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    pub async fn search_medicines(&self, query: &str) -> Result<Vec<Medicine>, ApiError> {
        self.get_json("api/medicines/search", &[("q", query)]).await
    }

    /// Fetch one medicine by id.
    ///
    /// Cached (5-minute TTL); the detail view calls this even when a
    /// selected-medicine handoff is present, to re-fetch authoritative data.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id.
    pub async fn get_medicine(&self, id: &str) -> Result<Medicine, ApiError> {
        if let Some(cached) = self.medicine_cache().get(id).await {
            return Ok(cached);
        }

        let medicine: Medicine = self.get_json(&format!("api/medicines/{id}"), &[]).await?;
        self.medicine_cache()
            .insert(id.to_owned(), medicine.clone())
            .await;
        Ok(medicine)
    }
}
