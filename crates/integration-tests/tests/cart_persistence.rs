//! Cart behavior over real file-backed storage, across simulated app
//! restarts.

use medikart_core::ProductId;
use medikart_integration_tests::temp_storage_file;
use medikart_storefront::models::UserProfile;
use medikart_storefront::storage::FileStorage;
use medikart_storefront::store::CartStore;
use rust_decimal::Decimal;
use serde_json::json;

fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        phone: "+919876543210".parse().expect("valid phone"),
        email: None,
        address: None,
    }
}

#[test]
fn cart_survives_reload_with_totals_intact() {
    let path = temp_storage_file("reload");

    {
        let mut store = CartStore::new(FileStorage::open(&path));
        store.login(&profile());
        assert!(store.add_to_cart(
            &json!({"id": "med-1", "name": "Dolo 650", "mrp": "₹35.00", "price": 30}),
            2,
        ));
        assert!(store.add_to_cart(
            &json!({"_id": "med-2", "name": "Cetirizine", "price": 45, "discountPrice": 40}),
            1,
        ));
        assert_eq!(store.cart_total(), Decimal::from(100));
    }

    // Fresh store over the same file: the snapshot and session come back.
    let store = CartStore::new(FileStorage::open(&path));
    assert!(store.is_logged_in());
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.cart_items_count(), 3);
    assert_eq!(store.cart_total(), Decimal::from(100));

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn paracetamol_scenario_end_to_end() {
    let path = temp_storage_file("paracetamol");
    let mut store = CartStore::new(FileStorage::open(&path));

    // Logged out: recorded intent is refused, nothing persisted.
    assert!(!store.add_to_cart(
        &json!({"name": "Paracetamol", "mrp": "₹50.00", "regularPrice": 40}),
        2,
    ));
    assert!(store.items().is_empty());

    store.login(&profile());
    assert!(store.add_to_cart(
        &json!({"name": "Paracetamol", "mrp": "₹50.00", "regularPrice": 40}),
        2,
    ));

    let line = &store.items()[0];
    assert_eq!(line.id.as_str(), "Paracetamol");
    assert_eq!(line.mrp, Some(Decimal::from(50)));
    assert_eq!(line.price, Decimal::from(40));
    assert_eq!(line.discount_price, Some(Decimal::from(40)));
    assert_eq!(line.quantity, 2);
    assert_eq!(store.cart_total(), Decimal::from(80));

    // Re-add with only a discount field: quantity merges, price fields are
    // overwritten from this call alone (no carry-over from the first call).
    assert!(store.add_to_cart(&json!({"name": "Paracetamol", "discountPrice": 35}), 1));
    let line = &store.items()[0];
    assert_eq!(line.quantity, 3);
    assert_eq!(line.price, Decimal::ZERO);
    assert_eq!(line.mrp, None);
    assert_eq!(line.discount_price, Some(Decimal::from(35)));
    assert_eq!(store.cart_total(), Decimal::from(105));

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn update_and_remove_flow_persists_each_step() {
    let path = temp_storage_file("update-remove");
    let mut store = CartStore::new(FileStorage::open(&path));
    store.login(&profile());

    store.add_to_cart(&json!({"id": "med-1", "price": 30}), 2);
    store.add_to_cart(&json!({"id": "med-2", "price": 10}), 4);

    store.update_quantity(&ProductId::new("med-2"), 1);
    {
        let reloaded = CartStore::new(FileStorage::open(&path));
        assert_eq!(reloaded.cart_items_count(), 3);
    }

    store.update_quantity(&ProductId::new("med-1"), 0);
    {
        let reloaded = CartStore::new(FileStorage::open(&path));
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].id.as_str(), "med-2");
    }

    store.clear_cart();
    let reloaded = CartStore::new(FileStorage::open(&path));
    assert!(reloaded.items().is_empty());
    assert_eq!(reloaded.cart_total(), Decimal::ZERO);

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn corrupted_snapshot_degrades_to_empty_cart() {
    let path = temp_storage_file("corrupt");

    {
        let mut store = CartStore::new(FileStorage::open(&path));
        store.login(&profile());
        store.add_to_cart(&json!({"id": "med-1", "price": 30}), 2);
    }

    // Corrupt the storage file wholesale.
    std::fs::write(&path, "{\"cartItems\": \"[[[broken\"}").expect("write");

    let store = CartStore::new(FileStorage::open(&path));
    assert!(store.items().is_empty());
    assert_eq!(store.cart_total(), Decimal::ZERO);

    std::fs::remove_file(&path).expect("cleanup");
}
