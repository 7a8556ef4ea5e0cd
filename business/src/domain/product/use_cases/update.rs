use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
