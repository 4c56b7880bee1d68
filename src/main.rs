mod actors;
mod app_system;
mod clients;
mod domain;
mod error;
mod messages;
mod seed;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, InventorySystem};
use crate::domain::{DateRange, ProductFilter};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting inventory monitoring backend");

    // Seed the store and start the actor system
    let system = InventorySystem::new();

    let span = tracing::info_span!("dashboard_snapshot");
    async {
        info!("Fetching initial dashboard data");

        let products = system
            .inventory_client
            .list_products(ProductFilter::default(), 10, 0)
            .await
            .map_err(|e| e.to_string())?;
        for product in &products {
            info!(
                id = %product.id,
                warehouse = %product.warehouse,
                stock = product.stock,
                demand = product.demand,
                status = ?product.status(),
                "Product"
            );
        }

        let warehouses = system
            .inventory_client
            .list_warehouses()
            .await
            .map_err(|e| e.to_string())?;
        info!(?warehouses, "Warehouses");

        let kpis = system
            .inventory_client
            .get_kpis(DateRange::SevenDays)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            total_stock = kpis.total_stock,
            total_demand = kpis.total_demand,
            fill_rate = kpis.fill_rate,
            trend_points = kpis.trend.len(),
            "KPIs"
        );

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("demand_update");
    let updated = async {
        info!("Updating demand for P-1001");
        system
            .inventory_client
            .update_demand("P-1001".to_string(), 200)
            .await
    }
    .instrument(span)
    .await;

    match updated {
        Ok(product) => info!(
            id = %product.id,
            demand = product.demand,
            status = ?product.status(),
            "Demand updated"
        ),
        Err(e) => error!(error = %e, "Demand update failed"),
    }

    let span = tracing::info_span!("stock_transfer");
    let transferred = async {
        info!("Transferring stock for P-1001");
        system
            .inventory_client
            .transfer_stock(
                "P-1001".to_string(),
                "BLR-A".to_string(),
                "DEL-B".to_string(),
                50,
            )
            .await
    }
    .instrument(span)
    .await;

    match transferred {
        Ok(product) => info!(id = %product.id, stock = product.stock, "Transfer processed"),
        Err(e) => error!(error = %e, "Transfer failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
