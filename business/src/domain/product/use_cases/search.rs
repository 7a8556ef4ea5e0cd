use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SearchProductsParams {
    /// Exclusive lower bound on price; must be positive.
    pub price_gt: f64,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError>;
}
