use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{DateRange, KpiSnapshot, Product, ProductFilter};
use crate::error::InventoryError;
use crate::messages::InventoryRequest;

/// Generates client methods with the oneshot channel boilerplate and
/// automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle for talking to the inventory actor. Cheap to clone; the transport
/// layer holds one of these and never touches the store directly.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    /// Manual method: shutdown carries no response channel.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown request");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|e| InventoryError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }

    /// Test-only internal state inspection.
    #[cfg(test)]
    pub async fn product_count(&self) -> Result<usize, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::GetProductCount { respond_to })
            .await
            .map_err(|_| InventoryError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| InventoryError::ActorCommunicationError("Actor dropped".to_string()))?
    }
}

client_method!(InventoryClient => fn list_products(filter: ProductFilter, limit: usize, offset: usize) -> Vec<Product> as InventoryRequest::ListProducts, Error = InventoryError);
client_method!(InventoryClient => fn list_warehouses() -> Vec<String> as InventoryRequest::ListWarehouses, Error = InventoryError);
client_method!(InventoryClient => fn get_kpis(range: DateRange) -> KpiSnapshot as InventoryRequest::GetKpis, Error = InventoryError);
client_method!(InventoryClient => fn update_demand(id: String, demand: u32) -> Product as InventoryRequest::UpdateDemand, Error = InventoryError);
client_method!(InventoryClient => fn transfer_stock(id: String, from_warehouse: String, to_warehouse: String, quantity: u32) -> Product as InventoryRequest::TransferStock, Error = InventoryError);
