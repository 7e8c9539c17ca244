use tracing::{error, info, instrument};

use super::WarehouseConfig;
use crate::clients::ProductClient;
use crate::inventory::InventoryMutator;
use crate::product_actor;

/// The main application system: starts the product actor and wires the
/// inventory on top of it.
pub struct WarehouseSystem {
    pub inventory: InventoryMutator<ProductClient>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl WarehouseSystem {
    /// Create and start the system. Must be called from within a tokio runtime.
    #[instrument(name = "warehouse_system", skip(config))]
    pub fn new(config: &WarehouseConfig) -> Self {
        info!(
            channel_buffer = config.channel_buffer,
            max_update_attempts = config.max_update_attempts,
            "Starting warehouse system"
        );

        let (actor, product_client) = product_actor::new(config.channel_buffer);
        let handle = tokio::spawn(actor.run());

        Self {
            inventory: InventoryMutator::new(product_client, config.max_update_attempts),
            handles: vec![handle],
        }
    }

    /// Drops the clients, which closes the actor's mailbox, then waits for
    /// the actor to drain and stop.
    ///
    /// Clones of the inventory handed out elsewhere keep the actor alive;
    /// drop them first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down warehouse system");
        drop(self.inventory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("Warehouse system shutdown complete");
        Ok(())
    }
}
