//! # Mock Framework
//!
//! Utilities for testing in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers like
//! [`expect_get`] or [`expect_update`] to assert what the client sends and to
//! script the actor's replies. [`StubStore`] is an in-memory [`ProductStore`]
//! with failure injection for exercising the inventory without an actor.

use std::sync::{Arc, Mutex};

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::domain::{Product, ProductCreate, ProductId, Quantities};
use crate::inventory::{ProductStore, StoreError};

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, update, respond_to }) => Some((id, update, respond_to)),
        _ => None,
    }
}

#[derive(Default)]
struct StubState {
    products: Vec<Product>,
    get_calls: usize,
    insert_calls: usize,
    update_calls: usize,
    pending_conflicts: usize,
    update_failure: Option<StoreError>,
    insert_failure: Option<StoreError>,
}

/// In-memory [`ProductStore`] that counts calls and can be told to fail.
#[derive(Clone, Default)]
pub struct StubStore {
    state: Arc<Mutex<StubState>>,
}

impl StubStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().products = products;
        store
    }

    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.state.lock().unwrap().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn get_calls(&self) -> usize {
        self.state.lock().unwrap().get_calls
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().unwrap().insert_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state.lock().unwrap().update_calls
    }

    /// The next `count` updates report a conflict without writing.
    pub fn conflict_next_updates(&self, count: usize) {
        self.state.lock().unwrap().pending_conflicts = count;
    }

    pub fn fail_updates(&self, error: StoreError) {
        self.state.lock().unwrap().update_failure = Some(error);
    }

    pub fn fail_inserts(&self, error: StoreError) {
        self.state.lock().unwrap().insert_failure = Some(error);
    }
}

impl ProductStore for StubStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.state.lock().unwrap().get_calls += 1;
        Ok(self.product(id))
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.state.lock().unwrap().products.clone())
    }

    async fn insert(&self, product: ProductCreate) -> Result<Product, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.insert_calls += 1;
        if let Some(error) = state.insert_failure.clone() {
            return Err(error);
        }
        let id = state.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Product::new(id, product.name, product.in_stock_quantity, 0);
        state.products.push(created.clone());
        Ok(created)
    }

    async fn update_quantities(
        &self,
        id: ProductId,
        expected: Quantities,
        next: Quantities,
    ) -> Result<Product, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.update_calls += 1;
        if let Some(error) = state.update_failure.clone() {
            return Err(error);
        }
        if state.pending_conflicts > 0 {
            state.pending_conflicts -= 1;
            return Err(StoreError::Conflict(id));
        }
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if product.quantities() != expected {
            return Err(StoreError::Conflict(id));
        }
        product.in_stock_quantity = next.in_stock;
        product.reserved_quantity = next.reserved;
        Ok(product.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            let params = ProductCreate { name: "Test".to_string(), in_stock_quantity: 3 };
            client.insert(params).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Ok(Product::new(1, "Test", 3, 0))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(Product::new(1, "Test", 3, 0)));
    }
}
