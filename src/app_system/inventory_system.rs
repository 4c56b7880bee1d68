use tracing::{error, info, instrument};
use crate::actors::InventoryService;
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::seed::seed_products;

/// The application coordinator: seeds the store, spawns the inventory actor,
/// and manages graceful shutdown.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl InventorySystem {
    /// Start the system with the fixed product catalog.
    pub fn new() -> Self {
        Self::with_products(seed_products())
    }

    /// Start the system with a caller-supplied product set.
    #[instrument(name = "inventory_system", skip(products))]
    pub fn with_products(products: Vec<Product>) -> Self {
        info!(products = products.len(), "Starting inventory system");

        let (service, inventory_client) = InventoryService::new(100, products);
        let handles = vec![tokio::spawn(service.run())];

        info!("Inventory system started");

        Self {
            inventory_client,
            handles,
        }
    }

    /// Gracefully shut the system down: signal the actor, then wait for its
    /// task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system");

        let _ = self.inventory_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
