//! Order placement and history endpoints. All require a bearer token.

use super::{ApiClient, ApiError};
use crate::models::{NewOrder, Order};

impl ApiClient {
    /// Place an order from the current cart snapshot.
    ///
    /// The backend recomputes pricing authoritatively before accepting.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token, or
    /// `ApiError::Status` with the backend's message (e.g. an item went out
    /// of stock between cart and checkout).
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post_json("api/orders", order).await
    }

    /// Fetch the logged-in user's order history.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("api/orders", &[]).await
    }
}
