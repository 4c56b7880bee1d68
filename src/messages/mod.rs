use tokio::sync::oneshot;
use crate::domain::{DateRange, KpiSnapshot, Product, ProductFilter};
use crate::error::InventoryError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the inventory actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum InventoryRequest {
    ListProducts {
        filter: ProductFilter,
        limit: usize,
        offset: usize,
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    },
    ListWarehouses {
        respond_to: ServiceResponse<Vec<String>, InventoryError>,
    },
    GetKpis {
        range: DateRange,
        respond_to: ServiceResponse<KpiSnapshot, InventoryError>,
    },
    UpdateDemand {
        id: String,
        demand: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    TransferStock {
        id: String,
        from_warehouse: String,
        to_warehouse: String,
        quantity: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    Shutdown,
    #[cfg(test)]
    GetProductCount {
        respond_to: ServiceResponse<usize, InventoryError>,
    },
}
