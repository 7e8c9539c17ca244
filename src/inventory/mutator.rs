use tracing::{debug, error, info, instrument, warn};

use super::names::uniquify;
use super::store::{ProductStore, StoreError};
use crate::domain::{
    AddProductRequest, CreateResponse, ErrorReason, Product, ProductCreate, ProductId, Quantities,
    UpdateQuantityRequest, UpdateResponse,
};

/// Computes the quantities a product should hold after a mutation, or why it can't.
type Transition = fn(&Product, i64) -> Result<Quantities, ErrorReason>;

/// Order: reserve `quantity` more units against what is on the shelf.
fn after_order(product: &Product, quantity: i64) -> Result<Quantities, ErrorReason> {
    let reserved = product
        .reserved_quantity
        .checked_add(quantity)
        .filter(|reserved| *reserved <= product.in_stock_quantity)
        .ok_or(ErrorReason::NotEnoughQuantity)?;
    Ok(Quantities {
        in_stock: product.in_stock_quantity,
        reserved,
    })
}

/// Ship: units leave the building, releasing reservations down to zero.
///
/// Rejected on the same bound as an order, evaluated before anything is subtracted.
fn after_ship(product: &Product, quantity: i64) -> Result<Quantities, ErrorReason> {
    after_order(product, quantity)?;
    Ok(Quantities {
        in_stock: product.in_stock_quantity - quantity,
        reserved: (product.reserved_quantity - quantity).max(0),
    })
}

/// Restock: more units on the shelf; reservations untouched.
fn after_restock(product: &Product, quantity: i64) -> Result<Quantities, ErrorReason> {
    let in_stock = product
        .in_stock_quantity
        .checked_add(quantity)
        .ok_or(ErrorReason::QuantityInvalid)?;
    Ok(Quantities {
        in_stock,
        reserved: product.reserved_quantity,
    })
}

fn store_failure(error: StoreError) -> ErrorReason {
    error!(error = %error, "Product store failure");
    ErrorReason::InvalidRequest
}

/// Applies order, ship, restock and add to the products held by a [`ProductStore`].
///
/// Every operation returns a response value; store failures of any kind are
/// logged and reported as [`ErrorReason::InvalidRequest`].
#[derive(Clone)]
pub struct InventoryMutator<S> {
    store: S,
    max_update_attempts: u32,
}

impl<S: ProductStore> InventoryMutator<S> {
    pub fn new(store: S, max_update_attempts: u32) -> Self {
        Self {
            store,
            max_update_attempts: max_update_attempts.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Option<Product> {
        match self.store.get(id).await {
            Ok(product) => product,
            Err(e) => {
                store_failure(e);
                None
            }
        }
    }

    /// Products with `in_stock > 0` and `in_stock > reserved`, in id order.
    #[instrument(skip(self))]
    pub async fn list_in_stock(&self) -> Vec<Product> {
        match self.store.list().await {
            Ok(products) => products.into_iter().filter(Product::is_in_stock).collect(),
            Err(e) => {
                store_failure(e);
                Vec::new()
            }
        }
    }

    /// Increases the reserved quantity.
    #[instrument(skip(self, request), fields(product_id = request.id, quantity = request.quantity))]
    pub async fn order(&self, request: UpdateQuantityRequest) -> UpdateResponse {
        self.apply(request, after_order).await.into()
    }

    /// Decreases both the reserved (floored at zero) and the in-stock quantity.
    #[instrument(skip(self, request), fields(product_id = request.id, quantity = request.quantity))]
    pub async fn ship(&self, request: UpdateQuantityRequest) -> UpdateResponse {
        self.apply(request, after_ship).await.into()
    }

    /// Increases the in-stock quantity.
    #[instrument(skip(self, request), fields(product_id = request.id, quantity = request.quantity))]
    pub async fn restock(&self, request: UpdateQuantityRequest) -> UpdateResponse {
        self.apply(request, after_restock).await.into()
    }

    /// Creates a product under a unique name with nothing reserved.
    #[instrument(skip(self, request), fields(name = ?request.name, in_stock = request.in_stock_quantity))]
    pub async fn add(&self, request: AddProductRequest) -> CreateResponse<Product> {
        let result = self.try_add(request).await;
        if let Err(reason) = &result {
            warn!(%reason, "Add rejected");
        }
        result.into()
    }

    async fn try_add(&self, request: AddProductRequest) -> Result<Product, ErrorReason> {
        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ErrorReason::InvalidRequest)?;
        if request.in_stock_quantity < 0 {
            return Err(ErrorReason::QuantityInvalid);
        }

        let existing = self.store.list().await.map_err(store_failure)?;
        let name = uniquify(name, &existing);
        debug!(resolved_name = %name, "Name resolved");

        let product = self
            .store
            .insert(ProductCreate {
                name,
                in_stock_quantity: request.in_stock_quantity,
            })
            .await
            .map_err(store_failure)?;
        info!(product_id = product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Read, validate, conditionally write. A concurrent change to the same
    /// product between the read and the write is retried from the read.
    async fn apply(&self, request: UpdateQuantityRequest, transition: Transition) -> Result<Product, ErrorReason> {
        let result = self.try_apply(request, transition).await;
        match &result {
            Ok(product) => info!(
                in_stock = product.in_stock_quantity,
                reserved = product.reserved_quantity,
                "Quantities updated"
            ),
            Err(reason) => warn!(%reason, "Update rejected"),
        }
        result
    }

    async fn try_apply(&self, request: UpdateQuantityRequest, transition: Transition) -> Result<Product, ErrorReason> {
        if request.quantity < 0 {
            return Err(ErrorReason::QuantityInvalid);
        }

        let mut attempt = 1;
        loop {
            let product = self
                .store
                .get(request.id)
                .await
                .map_err(store_failure)?
                .ok_or(ErrorReason::InvalidRequest)?;

            let next = transition(&product, request.quantity)?;

            match self.store.update_quantities(product.id, product.quantities(), next).await {
                Ok(updated) => return Ok(updated),
                Err(StoreError::Conflict(id)) if attempt < self.max_update_attempts => {
                    warn!(product_id = id, attempt, "Concurrent update detected, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(store_failure(e)),
            }
        }
    }
}
