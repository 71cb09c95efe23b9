//! Territory map: the value type and its fixed-size store.

pub mod store;
pub mod territory;

pub use store::TerritoryStore;
pub use territory::{Territory, MAX_TAG_LEN};
