use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductId, Quantities, QuantityUpdate};
use crate::inventory::{ProductStore, StoreError};

/// Client for interacting with the Product actor.
///
/// Every call is a single message to the actor, so each one is applied
/// atomically with respect to other callers.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

impl ProductStore for ProductClient {
    #[instrument(name = "get_product", skip(self))]
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(|e| StoreError::from_framework(Some(id), e))
    }

    #[instrument(name = "list_products", skip(self))]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        self.inner.list().await.map_err(|e| StoreError::from_framework(None, e))
    }

    #[instrument(name = "insert_product", skip(self))]
    async fn insert(&self, product: ProductCreate) -> Result<Product, StoreError> {
        debug!("Sending request");
        self.inner
            .create(product)
            .await
            .map_err(|e| StoreError::from_framework(None, e))
    }

    #[instrument(name = "update_quantities", skip(self))]
    async fn update_quantities(
        &self,
        id: ProductId,
        expected: Quantities,
        next: Quantities,
    ) -> Result<Product, StoreError> {
        debug!("Sending request");
        self.inner
            .update(id, QuantityUpdate { expected, next })
            .await
            .map_err(|e| StoreError::from_framework(Some(id), e))
    }
}
