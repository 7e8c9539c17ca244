//! The product store: a [`ResourceActor`] over [`Product`] entities.

pub mod entity;

use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::{Product, ProductId};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Creates a new Product actor and its client. Ids are assigned from 1 upwards.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let product_id_counter = Arc::new(AtomicI64::new(1));
    let next_product_id = move || -> ProductId { product_id_counter.fetch_add(1, Ordering::SeqCst) };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_id);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
