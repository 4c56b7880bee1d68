//! # Mock Framework
//!
//! Utilities for testing the client in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers
//! like [`expect_list_products`] or [`expect_update_demand`] to assert which
//! requests the client sends and to script the actor's responses.

use tokio::sync::mpsc;
use crate::clients::InventoryClient;
use crate::domain::{Product, ProductFilter};
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};

/// Creates a mock client and a receiver for asserting requests.
///
/// Tests of client logic don't need a running `InventoryService`: the mock
/// client sends messages into a channel the test controls, and the test
/// inspects them and replies over the oneshot, simulating the actor
/// deterministically.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Verifies that the next message is a ListProducts request.
pub async fn expect_list_products(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(ProductFilter, usize, usize, ServiceResponse<Vec<Product>, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::ListProducts { filter, limit, offset, respond_to }) => {
            Some((filter, limit, offset, respond_to))
        }
        _ => None,
    }
}

/// Verifies that the next message is an UpdateDemand request.
pub async fn expect_update_demand(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, u32, ServiceResponse<Product, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::UpdateDemand { id, demand, respond_to }) => {
            Some((id, demand, respond_to))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_list_products() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move {
            client.list_products(ProductFilter::default(), 10, 0).await
        });

        let (filter, limit, offset, responder) =
            expect_list_products(&mut receiver).await.expect("Expected ListProducts request");
        assert!(filter.search.is_none());
        assert_eq!((limit, offset), (10, 0));
        responder.send(Ok(Vec::new())).unwrap();

        let result = list_task.await.unwrap();
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_mock_client_propagates_not_found() {
        let (client, mut receiver) = create_mock_client(10);

        let update_task = tokio::spawn(async move {
            client.update_demand("P-9999".to_string(), 10).await
        });

        let (id, demand, responder) =
            expect_update_demand(&mut receiver).await.expect("Expected UpdateDemand request");
        assert_eq!(id, "P-9999");
        assert_eq!(demand, 10);
        responder.send(Err(InventoryError::NotFound(id))).unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(InventoryError::NotFound("P-9999".to_string())));
    }
}
