use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Product with ID {0} not found")]
    NotFound(i64),
    #[error("Product with ID {0} already exists")]
    AlreadyExists(u32),
    #[error("Product ID must be a positive integer")]
    InvalidId(i64),
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
    #[error("Actor communication error: {0}")]
    ActorUnavailable(String),
}
