use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{ProductId, ProductsConsumer};

pub struct ConsumerPriceParams {
    pub ids: Vec<ProductId>,
}

#[async_trait]
pub trait ConsumerPriceUseCase: Send + Sync {
    async fn execute(&self, params: ConsumerPriceParams) -> Result<ProductsConsumer, ProductError>;
}
