use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_name::{
    UpdateProductNameParams, UpdateProductNameUseCase,
};

pub struct UpdateProductNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductNameUseCase for UpdateProductNameUseCaseImpl {
    async fn execute(&self, params: UpdateProductNameParams) -> Result<Product, ProductError> {
        if params.name.is_empty() {
            return Err(ProductError::InvalidData);
        }

        self.logger
            .info(&format!("Renaming product {} to {}", params.id, params.name));

        let product = self
            .repository
            .update_name(params.id, &params.name)
            .await
            .map_err(ProductError::from_repository)?;

        Ok(product)
    }
}
