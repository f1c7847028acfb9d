//! Wire and persistence types shared between the stores and the API
//! bindings.
//!
//! Shapes mirror the backend's JSON contracts; fields the backend is known
//! to omit are optional with serde defaults.

pub mod medicine;
pub mod order;
pub mod user;
pub mod vendor;

pub use medicine::{Medicine, NewUserMedicine, UserMedicine};
pub use order::{NewOrder, Order, OrderItem};
pub use user::UserProfile;
pub use vendor::VendorApplication;
