use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Product, ProductCreate, ProductId, QuantityUpdate};

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Update = QuantityUpdate;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product with nothing reserved.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, FrameworkError> {
        Ok(Self::new(id, params.name, params.in_stock_quantity, 0))
    }

    fn on_create(&mut self) -> Result<(), FrameworkError> {
        if self.name.trim().is_empty() {
            return Err(FrameworkError::Validation("product name is blank".to_string()));
        }
        if !self.quantities().is_consistent() {
            return Err(FrameworkError::Validation(format!(
                "invalid quantities for new product: in stock {}",
                self.in_stock_quantity
            )));
        }
        Ok(())
    }

    /// Compare-and-swap on the quantity pair.
    ///
    /// # Errors
    /// - `Conflict` when the stored quantities no longer match what the caller read.
    /// - `Validation` when the new pair breaks `0 <= reserved <= in_stock`.
    fn on_update(&mut self, update: QuantityUpdate) -> Result<(), FrameworkError> {
        let current = self.quantities();
        if current != update.expected {
            return Err(FrameworkError::Conflict(format!(
                "product {} changed: expected {:?}, found {:?}",
                self.id, update.expected, current
            )));
        }
        if !update.next.is_consistent() {
            return Err(FrameworkError::Validation(format!(
                "product {} would hold {:?}",
                self.id, update.next
            )));
        }
        self.in_stock_quantity = update.next.in_stock;
        self.reserved_quantity = update.next.reserved;
        Ok(())
    }
}
