use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductsConsumer;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::consumer_price::{
    ConsumerPriceParams, ConsumerPriceUseCase,
};

pub struct ConsumerPriceUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConsumerPriceUseCase for ConsumerPriceUseCaseImpl {
    async fn execute(&self, params: ConsumerPriceParams) -> Result<ProductsConsumer, ProductError> {
        self.logger.info(&format!(
            "Computing consumer price for {} requested ids",
            params.ids.len()
        ));

        let matched = self
            .repository
            .find_published_by_ids(&params.ids)
            .await
            .map_err(ProductError::from_repository)?;
        if matched.len() < params.ids.len() {
            self.logger.debug(&format!(
                "Skipped {} missing or unpublished ids",
                params.ids.len() - matched.len()
            ));
        }

        let consumer = ProductsConsumer::from_matches(matched);

        self.logger.info(&format!(
            "Consumer price for {} products: {}",
            consumer.products.len(),
            consumer.total_price
        ));
        Ok(consumer)
    }
}
