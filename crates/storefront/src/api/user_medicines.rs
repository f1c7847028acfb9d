//! Tracked-medicine CRUD. All endpoints require a bearer token.

use super::{ApiClient, ApiError};
use crate::models::{NewUserMedicine, UserMedicine};

impl ApiClient {
    /// List the user's tracked medicines.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    pub async fn list_user_medicines(&self) -> Result<Vec<UserMedicine>, ApiError> {
        self.get_json("api/user-medicines", &[]).await
    }

    /// Add a tracked medicine.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    pub async fn add_user_medicine(
        &self,
        medicine: &NewUserMedicine,
    ) -> Result<UserMedicine, ApiError> {
        self.post_json("api/user-medicines", medicine).await
    }

    /// Update a tracked medicine in place.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown entry id.
    pub async fn update_user_medicine(
        &self,
        id: &str,
        medicine: &NewUserMedicine,
    ) -> Result<UserMedicine, ApiError> {
        self.put_json(&format!("api/user-medicines/{id}"), medicine)
            .await
    }

    /// Delete a tracked medicine.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown entry id.
    pub async fn delete_user_medicine(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("api/user-medicines/{id}")).await
    }
}
