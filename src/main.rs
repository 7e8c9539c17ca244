mod domain;
mod clients;
mod inventory;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, WarehouseConfig, WarehouseSystem};
use crate::domain::{AddProductRequest, UpdateQuantityRequest};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = WarehouseConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting warehouse");

    let system = WarehouseSystem::new(&config);
    let inventory = &system.inventory;

    let span = tracing::info_span!("stocking");
    let product_id = async {
        info!("Adding products");
        let widget = inventory.add(AddProductRequest::new("Widget", 10)).await;
        let duplicate = inventory.add(AddProductRequest::new(" widget ", 5)).await;
        info!(name = %duplicate.model.name, "Duplicate name resolved");
        if widget.success {
            Ok(widget.model.id)
        } else {
            Err(format!("Adding product failed: {:?}", widget.error_reason))
        }
    }
    .instrument(span)
    .await?;

    info!(product_id, "Product created successfully");

    let span = tracing::info_span!("order_processing");
    async {
        let order = inventory.order(UpdateQuantityRequest::new(product_id, 4)).await;
        info!(success = order.success, reason = ?order.error_reason, "Order placed");

        let too_much = inventory.order(UpdateQuantityRequest::new(product_id, 100)).await;
        info!(success = too_much.success, reason = ?too_much.error_reason, "Oversized order");

        let shipped = inventory.ship(UpdateQuantityRequest::new(product_id, 3)).await;
        info!(success = shipped.success, reason = ?shipped.error_reason, "Order shipped");

        let restocked = inventory.restock(UpdateQuantityRequest::new(product_id, 20)).await;
        info!(success = restocked.success, reason = ?restocked.error_reason, "Restocked");
    }
    .instrument(span)
    .await;

    match inventory.get_product(product_id).await {
        Some(product) => info!(
            in_stock = product.in_stock_quantity,
            reserved = product.reserved_quantity,
            "Final state"
        ),
        None => error!(product_id, "Product disappeared"),
    }
    let in_stock = inventory.list_in_stock().await;
    info!(count = in_stock.len(), "Products in stock");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Warehouse completed successfully");
    Ok(())
}
