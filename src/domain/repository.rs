use async_trait::async_trait;

use crate::events::HandlerError;
use super::customer::CustomerError;
use super::order::OrderError;
use super::product::ProductError;

// ============================================================================
// Repository Contract
// ============================================================================

/// Persistence port implemented per aggregate by the infrastructure layer.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn find(&self, id: &str) -> Result<T, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored customer is invalid: {0}")]
    Customer(#[from] CustomerError),

    #[error("Stored product is invalid: {0}")]
    Product(#[from] ProductError),

    #[error("Stored order is invalid: {0}")]
    Order(#[from] OrderError),

    /// The write succeeded but a handler failed afterwards.
    #[error("Event dispatch failed: {0}")]
    Dispatch(#[from] HandlerError),
}
