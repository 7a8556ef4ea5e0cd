use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;
use persistence::store::JsonFileStore;

use business::application::product::consumer_price::ConsumerPriceUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::update_name::UpdateProductNameUseCaseImpl;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Loads the catalog file and wires every product use case onto the shared repository.
    pub async fn new(storage: &StorageConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let store = Arc::new(JsonFileStore::new(&storage.products_file));
        let product_repository = Arc::new(
            ProductRepositoryInMemory::load(store)
                .await
                .with_context(|| {
                    format!(
                        "could not load products from {}",
                        storage.products_file.display()
                    )
                })?,
        );

        // Create and update validate then write under one lock so codes stay unique
        let catalog_write_lock = Arc::new(tokio::sync::Mutex::new(()));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            write_lock: catalog_write_lock.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let consumer_price_use_case = Arc::new(ConsumerPriceUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            write_lock: catalog_write_lock,
        });
        let update_name_use_case = Arc::new(UpdateProductNameUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            consumer_price_use_case,
            update_use_case,
            update_name_use_case,
            delete_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
        })
    }
}
