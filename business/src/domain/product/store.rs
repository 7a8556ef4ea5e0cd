use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Durable source the catalog is seeded from and snapshotted to.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, products: &[Product]) -> Result<(), RepositoryError>;
}
