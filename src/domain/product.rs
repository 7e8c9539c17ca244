use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
pub type ProductId = i64;

/// Represents one stock-keeping unit in the warehouse.
///
/// The default value doubles as the empty model returned by a rejected add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub in_stock_quantity: i64,
    pub reserved_quantity: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, in_stock_quantity: i64, reserved_quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            in_stock_quantity,
            reserved_quantity,
        }
    }

    pub fn quantities(&self) -> Quantities {
        Quantities {
            in_stock: self.in_stock_quantity,
            reserved: self.reserved_quantity,
        }
    }

    /// Publicly in stock: something on the shelf that is not already spoken for.
    pub fn is_in_stock(&self) -> bool {
        self.in_stock_quantity > 0 && self.in_stock_quantity > self.reserved_quantity
    }
}

/// The pair of counters a quantity update reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantities {
    pub in_stock: i64,
    pub reserved: i64,
}

impl Quantities {
    /// `0 <= reserved <= in_stock`
    pub fn is_consistent(&self) -> bool {
        self.reserved >= 0 && self.reserved <= self.in_stock
    }
}

/// Payload handed to the store when inserting a product.
///
/// There is no id or reserved quantity: the store assigns the id and new
/// products always start with nothing reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCreate {
    pub name: String,
    pub in_stock_quantity: i64,
}

/// Conditional quantity write: applied only if the stored quantities still equal `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub expected: Quantities,
    pub next: Quantities,
}
