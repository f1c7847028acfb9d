//! Application state shared across views.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use secrecy::SecretString;

use crate::api::ApiClient;
use crate::api::auth::AuthResponse;
use crate::config::StorefrontConfig;
use crate::storage::{FileStorage, StorageBackend, keys};
use crate::store::{CartStore, SelectedMedicine};

/// Application state shared across all views.
///
/// Cheaply cloneable via `Arc`. The stores live behind mutexes so the
/// state can be handed to async call sites, but mutations remain
/// effectively single-threaded: every store operation is synchronous and
/// completes (including its write-through persistence) before the lock is
/// released.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: ApiClient,
    cart: Mutex<CartStore<FileStorage>>,
    selected: Mutex<SelectedMedicine>,
}

impl AppState {
    /// Create the application state: open storage, build the cart store
    /// from persisted state, and restore a persisted auth token into the
    /// API client.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = ApiClient::new(&config);
        let storage = FileStorage::open(&config.storage_file);

        if let Some(token) = storage.get(keys::AUTH_TOKEN) {
            api.set_token(SecretString::from(token));
        }

        let cart = CartStore::new(storage);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                cart: Mutex::new(cart),
                selected: Mutex::new(SelectedMedicine::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Lock the cart/session store.
    pub fn cart(&self) -> MutexGuard<'_, CartStore<FileStorage>> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the selected-medicine handoff slot.
    pub fn selected(&self) -> MutexGuard<'_, SelectedMedicine> {
        self.inner
            .selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a successful backend authentication.
    ///
    /// Installs the bearer token on the API client, persists it, and marks
    /// the session logged in with the returned profile.
    pub fn complete_login(&self, response: &AuthResponse) {
        self.inner
            .api
            .set_token(SecretString::from(response.token.clone()));

        let mut cart = self.cart();
        cart.login(&response.user);
        if let Err(e) = cart.storage_mut().set(keys::AUTH_TOKEN, &response.token) {
            tracing::warn!(error = %e, "Failed to persist auth token");
        }
    }

    /// Log out: drop the token from the client and clear persisted session
    /// state. Cart contents survive.
    pub fn logout(&self) {
        self.inner.api.clear_token();
        self.cart().logout();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use std::path::PathBuf;
    use std::time::Duration;
    use url::Url;

    fn temp_config() -> StorefrontConfig {
        let file = std::env::temp_dir().join(format!("medikart-state-{}.json", uuid::Uuid::new_v4()));
        StorefrontConfig {
            api_base_url: Url::parse("https://api.medikart.example").unwrap(),
            storage_file: file,
            http_timeout: Duration::from_secs(5),
        }
    }

    fn auth_response() -> AuthResponse {
        AuthResponse {
            token: "jwt-abc".into(),
            user: UserProfile {
                id: "u-1".into(),
                name: "Asha".into(),
                phone: "+919876543210".parse().unwrap(),
                email: None,
                address: None,
            },
        }
    }

    fn cleanup(path: &PathBuf) {
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_fresh_state_is_logged_out() {
        let config = temp_config();
        let state = AppState::new(config.clone());
        assert!(!state.cart().is_logged_in());
        assert!(!state.api().has_token());
        cleanup(&config.storage_file);
    }

    #[test]
    fn test_complete_login_then_restart_restores_session() {
        let config = temp_config();

        let state = AppState::new(config.clone());
        state.complete_login(&auth_response());
        assert!(state.cart().is_logged_in());
        assert!(state.api().has_token());
        drop(state);

        // A fresh state over the same storage file picks the session up.
        let restarted = AppState::new(config.clone());
        assert!(restarted.cart().is_logged_in());
        assert!(restarted.api().has_token());

        cleanup(&config.storage_file);
    }

    #[test]
    fn test_logout_clears_session_but_not_cart() {
        let config = temp_config();
        let state = AppState::new(config.clone());
        state.complete_login(&auth_response());
        state
            .cart()
            .add_to_cart(&serde_json::json!({"id": "med-1", "price": 30}), 1);

        state.logout();
        assert!(!state.api().has_token());
        assert!(!state.cart().is_logged_in());
        assert_eq!(state.cart().items().len(), 1);

        cleanup(&config.storage_file);
    }
}
