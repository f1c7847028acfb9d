//! Session lifecycle through `AppState`: login, restart, logout.

use std::time::Duration;

use medikart_integration_tests::temp_storage_file;
use medikart_storefront::api::auth::AuthResponse;
use medikart_storefront::config::StorefrontConfig;
use medikart_storefront::models::UserProfile;
use medikart_storefront::state::AppState;
use serde_json::json;
use url::Url;

fn config_with_storage(tag: &str) -> StorefrontConfig {
    StorefrontConfig {
        api_base_url: Url::parse("https://api.medikart.example").expect("valid url"),
        storage_file: temp_storage_file(tag),
        http_timeout: Duration::from_secs(5),
    }
}

fn auth_response() -> AuthResponse {
    AuthResponse {
        token: "jwt-abc".to_owned(),
        user: UserProfile {
            id: "u-1".to_owned(),
            name: "Asha".to_owned(),
            phone: "+919876543210".parse().expect("valid phone"),
            email: Some("asha@example.com".parse().expect("valid email")),
            address: None,
        },
    }
}

#[test]
fn login_restart_logout_lifecycle() {
    let config = config_with_storage("lifecycle");

    // Fresh profile: anonymous, no token.
    let state = AppState::new(config.clone());
    assert!(!state.cart().is_logged_in());
    assert!(!state.api().has_token());

    state.complete_login(&auth_response());
    state
        .cart()
        .add_to_cart(&json!({"id": "med-1", "price": 30}), 2);
    drop(state);

    // Restart: token and session restored from the storage file.
    let state = AppState::new(config.clone());
    assert!(state.cart().is_logged_in());
    assert!(state.api().has_token());
    assert_eq!(state.cart().cart_items_count(), 2);

    // Logout drops the session but keeps the cart.
    state.logout();
    assert!(!state.api().has_token());
    assert!(!state.cart().is_logged_in());
    assert_eq!(state.cart().items().len(), 1);
    drop(state);

    // Restart after logout: still anonymous, cart still there, and adding
    // to it is refused until the next login.
    let state = AppState::new(config.clone());
    assert!(!state.cart().is_logged_in());
    assert!(!state.api().has_token());
    assert!(!state
        .cart()
        .add_to_cart(&json!({"id": "med-2", "price": 10}), 1));
    assert_eq!(state.cart().items().len(), 1);

    std::fs::remove_file(&config.storage_file).expect("cleanup");
}

#[test]
fn selected_medicine_handoff_is_transient() {
    let config = config_with_storage("handoff");
    let state = AppState::new(config.clone());

    let medicine = serde_json::from_value(json!({"id": "med-7", "name": "Ibuprofen"}))
        .expect("valid medicine");
    state.selected().set(medicine);
    assert_eq!(state.selected().get().map(|m| m.id.clone()).as_deref(), Some("med-7"));
    drop(state);

    // The slot is in-memory only; a restart starts empty.
    let state = AppState::new(config.clone());
    assert!(state.selected().get().is_none());

    let _ = std::fs::remove_file(&config.storage_file);
}
