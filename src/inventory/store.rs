use std::future::Future;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{Product, ProductCreate, ProductId, Quantities};

/// Failures reported by a [`ProductStore`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product {0} was modified concurrently")]
    Conflict(ProductId),
    #[error("Store rejected the write: {0}")]
    Rejected(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn from_framework(id: Option<ProductId>, error: FrameworkError) -> Self {
        match (error, id) {
            (FrameworkError::NotFound(_), Some(id)) => Self::NotFound(id),
            (FrameworkError::Conflict(_), Some(id)) => Self::Conflict(id),
            (FrameworkError::NotFound(msg), None) | (FrameworkError::Conflict(msg), None) => {
                Self::Rejected(msg)
            }
            (FrameworkError::Validation(msg), _) => Self::Rejected(msg),
            (e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped), _) => {
                Self::Unavailable(e.to_string())
            }
        }
    }
}

/// The authoritative product collection as seen by the inventory.
///
/// `update_quantities` is conditional: it writes `next` only while the stored
/// quantities still equal `expected`, and reports [`StoreError::Conflict`]
/// otherwise.
pub trait ProductStore: Send + Sync {
    fn get(&self, id: ProductId) -> impl Future<Output = Result<Option<Product>, StoreError>> + Send;

    /// All products in ascending id order.
    fn list(&self) -> impl Future<Output = Result<Vec<Product>, StoreError>> + Send;

    fn insert(&self, product: ProductCreate) -> impl Future<Output = Result<Product, StoreError>> + Send;

    fn update_quantities(
        &self,
        id: ProductId,
        expected: Quantities,
        next: Quantities,
    ) -> impl Future<Output = Result<Product, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_store_errors() {
        assert_eq!(
            StoreError::from_framework(Some(4), FrameworkError::Conflict("stale".into())),
            StoreError::Conflict(4)
        );
        assert_eq!(
            StoreError::from_framework(Some(4), FrameworkError::NotFound("4".into())),
            StoreError::NotFound(4)
        );
        assert_eq!(
            StoreError::from_framework(None, FrameworkError::ActorClosed),
            StoreError::Unavailable("Actor closed".into())
        );
        assert_eq!(
            StoreError::from_framework(Some(1), FrameworkError::Validation("bad".into())),
            StoreError::Rejected("bad".into())
        );
    }
}
