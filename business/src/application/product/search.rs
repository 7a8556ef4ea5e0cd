use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        if params.price_gt.is_nan() || params.price_gt <= 0.0 {
            return Err(ProductError::InvalidData);
        }

        self.logger
            .info(&format!("Searching products priced above {}", params.price_gt));

        let products = self
            .repository
            .search(params.price_gt)
            .await
            .map_err(ProductError::from_repository)?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
