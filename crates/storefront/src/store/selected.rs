//! Transient list-to-detail medicine handoff.

use crate::models::Medicine;

/// A single mutable slot carrying a medicine from a list or search view to
/// the detail view, so the detail view can render immediately without a
/// redundant fetch.
///
/// Last write wins; there are no other invariants. The detail view treats
/// the slot as an optional fallback and still re-fetches authoritative data
/// by id whenever it has one.
#[derive(Debug, Default)]
pub struct SelectedMedicine {
    slot: Option<Medicine>,
}

impl SelectedMedicine {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Replace the slot's contents.
    pub fn set(&mut self, medicine: Medicine) {
        self.slot = Some(medicine);
    }

    /// Peek at the current contents.
    #[must_use]
    pub const fn get(&self) -> Option<&Medicine> {
        self.slot.as_ref()
    }

    /// Take the contents, leaving the slot empty.
    pub fn take(&mut self) -> Option<Medicine> {
        self.slot.take()
    }

    /// Empty the slot.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
