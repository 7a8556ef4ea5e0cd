use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use super::validation::validate;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    /// Shared with the create use case; held from validation until the write lands.
    pub write_lock: Arc<Mutex<()>>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let _write = self.write_lock.lock().await;

        if let Err(e) = validate(
            self.repository.as_ref(),
            Some(params.id),
            &params.code_value,
            &params.expiration,
        )
        .await
        {
            self.logger.warn(&format!(
                "Rejected update of product {}: {}",
                params.id, e
            ));
            return Err(e);
        }

        let replacement = Product {
            id: params.id,
            name: params.name,
            quantity: params.quantity,
            code_value: params.code_value,
            is_published: params.is_published,
            expiration: params.expiration,
            price: params.price,
        };

        let updated = self
            .repository
            .update(&replacement)
            .await
            .map_err(ProductError::from_repository)?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
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

    fn make_product(id: ProductId, code: &str) -> Product {
        Product {
            id,
            name: "Cookie - Oatmeal".to_string(),
            quantity: 130,
            code_value: code.to_string(),
            is_published: false,
            expiration: "28/01/2022".to_string(),
            price: 275.47,
        }
    }

    fn params(id: ProductId, code: &str, expiration: &str) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Update by test".to_string(),
            quantity: 138,
            code_value: code.to_string(),
            is_published: false,
            expiration: expiration.to_string(),
            price: 555.47,
        }
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![make_product(1, "M7157"), make_product(2, "M4315")]));
        mock_repo
            .expect_update()
            .withf(|product| product.id == 1 && product.code_value == "S82254D")
            .returning(|product| Ok(product.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_lock: Default::default(),
        };

        let result = use_case.execute(params(1, "S82254D", "01/01/2022")).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Update by test");
        assert_eq!(product.quantity, 138);
        assert_eq!(product.price, 555.47);
    }

    #[tokio::test]
    async fn should_keep_own_code_when_updating_same_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![make_product(1, "M7157")]));
        mock_repo
            .expect_update()
            .returning(|product| Ok(product.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_lock: Default::default(),
        };

        let result = use_case.execute(params(1, "M7157", "28/01/2022")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_update_when_code_belongs_to_other_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![make_product(1, "M7157"), make_product(2, "M4315")]));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_lock: Default::default(),
        };

        let result = use_case.execute(params(1, "M4315", "28/01/2022")).await;

        assert!(matches!(result.unwrap_err(), ProductError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_update_when_expiration_is_invalid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![make_product(1, "M7157")]));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_lock: Default::default(),
        };

        let result = use_case.execute(params(1, "M7157", "2022-01-28")).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidDateFormat
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(Vec::new()));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_lock: Default::default(),
        };

        let result = use_case.execute(params(777, "M71599", "28/01/2022")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_warn_when_update_is_rejected() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![make_product(1, "M7157"), make_product(2, "M4315")]));
        mock_repo.expect_update().never();

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("product.already_exists"))
            .times(1)
            .returning(|_| ());

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
            write_lock: Default::default(),
        };

        let result = use_case.execute(params(1, "M4315", "28/01/2022")).await;

        assert!(matches!(result.unwrap_err(), ProductError::AlreadyExists));
    }
}
