use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

use super::validation::validate;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    /// Shared with the update use case; held from validation until the write lands.
    pub write_lock: Arc<Mutex<()>>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product with code: {}", params.code_value));

        let _write = self.write_lock.lock().await;

        if let Err(e) = validate(
            self.repository.as_ref(),
            None,
            &params.code_value,
            &params.expiration,
        )
        .await
        {
            self.logger.warn(&format!(
                "Rejected product {}: {}",
                params.code_value, e
            ));
            return Err(e);
        }

        let product = self
            .repository
            .create(NewProductProps {
                name: params.name,
                quantity: params.quantity,
                code_value: params.code_value,
                is_published: params.is_published,
                expiration: params.expiration,
                price: params.price,
            })
            .await
            .map_err(ProductError::from_repository)?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
