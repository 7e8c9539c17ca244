//! Request and response values exchanged with callers of the inventory.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::product::{Product, ProductId};

/// Why an inventory operation was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorReason {
    #[error("quantity must not be negative")]
    QuantityInvalid,
    #[error("invalid request")]
    InvalidRequest,
    #[error("not enough quantity")]
    NotEnoughQuantity,
}

/// Body of an order, ship or restock call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    pub id: ProductId,
    pub quantity: i64,
}

impl UpdateQuantityRequest {
    pub fn new(id: ProductId, quantity: i64) -> Self {
        Self { id, quantity }
    }
}

/// Body of an add call.
///
/// Callers cannot choose an id or a reserved quantity; any such fields in an
/// incoming JSON body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub in_stock_quantity: i64,
}

impl AddProductRequest {
    pub fn new(name: impl Into<String>, in_stock_quantity: i64) -> Self {
        Self {
            name: Some(name.into()),
            in_stock_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub success: bool,
    pub error_reason: Option<ErrorReason>,
}

impl UpdateResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error_reason: None,
        }
    }

    pub fn failure(reason: ErrorReason) -> Self {
        Self {
            success: false,
            error_reason: Some(reason),
        }
    }
}

impl<T> From<Result<T, ErrorReason>> for UpdateResponse {
    fn from(result: Result<T, ErrorReason>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(reason) => Self::failure(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse<T> {
    pub success: bool,
    pub error_reason: Option<ErrorReason>,
    pub model: T,
}

impl<T: Default> CreateResponse<T> {
    pub fn success(model: T) -> Self {
        Self {
            success: true,
            error_reason: None,
            model,
        }
    }

    /// A failed create always carries the empty model.
    pub fn failure(reason: ErrorReason) -> Self {
        Self {
            success: false,
            error_reason: Some(reason),
            model: T::default(),
        }
    }
}

impl From<Result<Product, ErrorReason>> for CreateResponse<Product> {
    fn from(result: Result<Product, ErrorReason>) -> Self {
        match result {
            Ok(product) => Self::success(product),
            Err(reason) => Self::failure(reason),
        }
    }
}
