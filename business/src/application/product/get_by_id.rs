use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .debug(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_repository)?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, ProductId};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn create(&self, props: NewProductProps) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn update_name(&self, id: ProductId, name: &str) -> Result<Product, RepositoryError>;
            async fn search(&self, price_gt: f64) -> Result<Vec<Product>, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
            async fn find_published_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 4)
            .returning(|id| {
                Ok(Product {
                    id,
                    name: "Cookie - Oatmeal".to_string(),
                    quantity: 130,
                    code_value: "M7157".to_string(),
                    is_published: false,
                    expiration: "28/01/2022".to_string(),
                    price: 275.47,
                })
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 4 }).await;

        let product = result.unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.name, "Cookie - Oatmeal");
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 777 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
