use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
