use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product, ProductId};

/// Ordered product storage. Holds no business rules.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Assigns the next identifier and appends the product.
    async fn create(&self, props: NewProductProps) -> Result<Product, RepositoryError>;
    /// Replaces the product holding `product.id`.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update_name(&self, id: ProductId, name: &str) -> Result<Product, RepositoryError>;
    /// Products priced strictly above `price_gt`, in storage order.
    async fn search(&self, price_gt: f64) -> Result<Vec<Product>, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    /// Published products for each id, following the order of `ids`.
    async fn find_published_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError>;
}
