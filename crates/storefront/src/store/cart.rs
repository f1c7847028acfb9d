//! The cart/session store.
//!
//! Single source of truth for "what is in the cart" and "is a user logged
//! in". The store is a plain value constructed once at application start
//! and passed by handle to every consumer - no ambient global, so tests
//! construct isolated instances over [`MemoryStorage`].
//!
//! # Semantics
//!
//! - At most one line exists per derived product id. Re-adding an existing
//!   id increments its quantity and overwrites all three price fields from
//!   the latest call's normalization (latest-call-wins, including resetting
//!   fields the new payload omits).
//! - Every mutation synchronously re-persists the full cart snapshot
//!   (write-through). There is no window between an in-memory change and
//!   its persisted state.
//! - Nothing here fails: unparseable prices degrade to defaults, malformed
//!   persisted data degrades to an empty cart, and a failed re-persist is
//!   logged and swallowed. The only explicit failure signal is
//!   [`add_to_cart`](CartStore::add_to_cart) returning `false` for a
//!   logged-out caller.
//!
//! The cart is purely local. It is never synced to the backend, so there is
//! no merge across devices and no conflict resolution.

use medikart_core::{CartLine, NormalizedProduct, ProductId};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::UserProfile;
use crate::storage::{StorageBackend, keys};

/// Cart contents plus session flags, backed by write-through storage.
#[derive(Debug)]
pub struct CartStore<S: StorageBackend> {
    storage: S,
    items: Vec<CartLine>,
    logged_in: bool,
    cart_open: bool,
}

impl<S: StorageBackend> CartStore<S> {
    /// Create the store, synchronously reading persisted state.
    ///
    /// A persisted profile sets the logged-in flag; a persisted cart
    /// snapshot seeds the items. Malformed data for either key is logged
    /// and treated as absent, never as a fatal error.
    pub fn new(storage: S) -> Self {
        let logged_in = match storage.get(keys::USER_PROFILE) {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed persisted profile, treating as logged out");
                    false
                }
            },
            None => false,
        };

        let items = match storage.get(keys::CART_ITEMS) {
            Some(raw) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed persisted cart, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            storage,
            items,
            logged_in,
            cart_open: false,
        }
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add a raw catalog payload to the cart.
    ///
    /// Anonymous carts are not supported: a logged-out caller gets `false`
    /// and no mutation, and views use that signal to redirect to the login
    /// prompt. That is the only failure mode - price normalization cannot
    /// reject (see [`NormalizedProduct::from_value`]).
    ///
    /// A line with the same derived id has its quantity incremented and its
    /// `mrp`/`price`/`discount_price` overwritten from this call's payload;
    /// otherwise a new line is appended. A zero quantity is treated as one.
    pub fn add_to_cart(&mut self, product: &Value, quantity: u32) -> bool {
        if !self.logged_in {
            return false;
        }

        let quantity = quantity.max(1);
        let normalized = NormalizedProduct::from_value(product);

        if let Some(line) = self.items.iter_mut().find(|l| l.id == normalized.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            line.mrp = normalized.mrp;
            line.price = normalized.price;
            line.discount_price = Some(normalized.discount_price);
        } else {
            self.items.push(CartLine::new(normalized, quantity));
        }

        self.persist_cart();
        true
    }

    /// Remove the line with the given id. No-op if absent; idempotent.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.items.retain(|line| line.id != *id);
        self.persist_cart();
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A zero or negative quantity removes the line instead. No-op if the
    /// id is not present.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.id == *id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.persist_cart();
    }

    /// Empty the cart unconditionally. Idempotent.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist_cart();
    }

    // =========================================================================
    // Reads and derived values
    // =========================================================================

    /// The current cart lines.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn cart_items_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// Always prefers a line's discount price over its regular price; `mrp`
    /// never contributes.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.items.iter().map(CartLine::line_total).sum()
    }

    // =========================================================================
    // Cart drawer visibility
    // =========================================================================

    /// Whether the cart drawer is visible.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Toggle or force the cart drawer's visibility.
    ///
    /// With `Some(target)`, sets visibility to `target`; setting the value
    /// it already has is coalesced into a no-op. With `None`, flips the
    /// current value. Returns whether visibility actually changed, so
    /// racing UI triggers (icon click, outside-click dismissal, open-on-add)
    /// do not signal redundant updates downstream.
    pub fn toggle_cart(&mut self, force: Option<bool>) -> bool {
        match force {
            Some(target) if target == self.cart_open => false,
            Some(target) => {
                self.cart_open = target;
                true
            }
            None => {
                self.cart_open = !self.cart_open;
                true
            }
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Whether a user is currently logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Record a successful login, persisting the profile.
    ///
    /// The profile is not validated here; it only exists because the
    /// backend already accepted it.
    pub fn login(&mut self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(keys::USER_PROFILE, &raw) {
                    tracing::warn!(error = %e, "Failed to persist profile");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize profile"),
        }
        self.logged_in = true;
    }

    /// Clear the persisted profile and auth token.
    ///
    /// The cart contents intentionally survive logout.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(keys::USER_PROFILE) {
            tracing::warn!(error = %e, "Failed to clear persisted profile");
        }
        if let Err(e) = self.storage.remove(keys::AUTH_TOKEN) {
            tracing::warn!(error = %e, "Failed to clear persisted token");
        }
        self.logged_in = false;
    }

    /// Direct access to the underlying storage (token persistence).
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Shared access to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Re-persist the full cart snapshot (write-through on every mutation).
    fn persist_cart(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(keys::CART_ITEMS, &raw) {
                    tracing::warn!(error = %e, "Failed to persist cart snapshot");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize cart snapshot"),
        }
    }
}
