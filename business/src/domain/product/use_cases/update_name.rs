use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

pub struct UpdateProductNameParams {
    pub id: ProductId,
    pub name: String,
}

#[async_trait]
pub trait UpdateProductNameUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductNameParams) -> Result<Product, ProductError>;
}
