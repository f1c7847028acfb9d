//! Client-side state containers.
//!
//! - [`CartStore`] - cart contents, session flags, and derived totals; the
//!   single source of truth every view reads from and mutates through.
//! - [`SelectedMedicine`] - transient list-to-detail handoff slot.

pub mod cart;
pub mod selected;

pub use cart::CartStore;
pub use selected::SelectedMedicine;
