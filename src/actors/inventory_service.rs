use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::InventoryClient;
use crate::domain::{DateRange, KpiSnapshot, Product, ProductFilter};
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};
use super::{kpi, query};

/// Owns the product records for the lifetime of the process.
///
/// All reads and writes arrive over one channel and each message runs to
/// completion before the next, so every mutation is a single uninterrupted
/// read-modify-write against one record. No other component holds a mutable
/// reference to the store.
pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    products: Vec<Product>,
}

impl InventoryService {
    pub fn new(buffer_size: usize, products: Vec<Product>) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, products };
        let client = InventoryClient::new(sender);
        (service, client)
    }

    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.products.len(), "InventoryService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::ListProducts { filter, limit, offset, respond_to } => {
                    self.handle_list_products(filter, limit, offset, respond_to);
                }
                InventoryRequest::ListWarehouses { respond_to } => {
                    self.handle_list_warehouses(respond_to);
                }
                InventoryRequest::GetKpis { range, respond_to } => {
                    self.handle_get_kpis(range, respond_to);
                }
                InventoryRequest::UpdateDemand { id, demand, respond_to } => {
                    self.handle_update_demand(id, demand, respond_to);
                }
                InventoryRequest::TransferStock {
                    id,
                    from_warehouse,
                    to_warehouse,
                    quantity,
                    respond_to,
                } => {
                    self.handle_transfer_stock(id, from_warehouse, to_warehouse, quantity, respond_to);
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
                #[cfg(test)]
                InventoryRequest::GetProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.products.len()));
                }
            }
        }
        info!("InventoryService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(
        &self,
        filter: ProductFilter,
        limit: usize,
        offset: usize,
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    ) {
        debug!("Processing list_products request");
        let page = query::list_products(&self.products, &filter, limit, offset);
        info!(returned = page.len(), "Products listed");
        let _ = respond_to.send(Ok(page));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_warehouses(&self, respond_to: ServiceResponse<Vec<String>, InventoryError>) {
        debug!("Processing list_warehouses request");
        let warehouses = query::list_warehouses(&self.products);
        let _ = respond_to.send(Ok(warehouses));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_kpis(
        &self,
        range: DateRange,
        respond_to: ServiceResponse<KpiSnapshot, InventoryError>,
    ) {
        debug!("Processing get_kpis request");
        let today = Utc::now().date_naive();
        let snapshot = kpi::snapshot(
            &self.products,
            range.days(),
            today,
            &mut rand::thread_rng(),
        );
        info!(
            total_stock = snapshot.total_stock,
            total_demand = snapshot.total_demand,
            fill_rate = snapshot.fill_rate,
            "KPIs computed"
        );
        let _ = respond_to.send(Ok(snapshot));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_update_demand(
        &mut self,
        id: String,
        demand: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    ) {
        debug!("Processing update_demand request");
        // Demand is applied exactly as given; range policy belongs to callers.
        let result = self.find_mut(&id).map(|product| {
            product.demand = demand;
            info!(demand, status = ?product.status(), "Demand updated");
            product.clone()
        });
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_transfer_stock(
        &mut self,
        id: String,
        from_warehouse: String,
        to_warehouse: String,
        quantity: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    ) {
        debug!("Processing transfer_stock request");
        let result = self.find_mut(&id).map(|product| {
            if product.warehouse == from_warehouse {
                // Decrement-only: the destination side is not modeled and the
                // record keeps its current warehouse.
                product.stock = product.stock.saturating_sub(quantity);
                info!(
                    quantity,
                    stock = product.stock,
                    to_warehouse = %to_warehouse,
                    "Stock deducted from source warehouse"
                );
            } else {
                warn!(
                    actual = %product.warehouse,
                    requested = %from_warehouse,
                    "Transfer source does not match product warehouse, record left unchanged"
                );
            }
            product.clone()
        });
        let _ = respond_to.send(result);
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Product, InventoryError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }
}
