use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self
            .repository
            .get_all()
            .await
            .map_err(ProductError::from_repository)?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
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
    async fn should_return_all_products_in_storage_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                NewProductProps {
                    name: "Oil - Margarine".to_string(),
                    quantity: 439,
                    code_value: "S82254D".to_string(),
                    is_published: true,
                    expiration: "15/12/2021".to_string(),
                    price: 71.42,
                }
                .with_id(1),
                NewProductProps {
                    name: "Pineapple - Canned, Rings".to_string(),
                    quantity: 345,
                    code_value: "M4637".to_string(),
                    is_published: true,
                    expiration: "09/08/2021".to_string(),
                    price: 352.79,
                }
                .with_id(2),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Oil - Margarine");
        assert_eq!(products[1].id, 2);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_storage_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Load));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), ProductError::Internal(_)));
    }

    #[tokio::test]
    async fn should_keep_not_found_distinct_from_storage_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::NotFound));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
