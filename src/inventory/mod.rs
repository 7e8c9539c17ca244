//! Inventory rules: quantity transitions, name resolution and the store boundary.

mod mutator;
mod names;
mod store;

pub use mutator::InventoryMutator;
pub use store::{ProductStore, StoreError};
