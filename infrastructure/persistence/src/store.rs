use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::store::ProductStore;

use crate::product::entity::ProductEntity;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.read_error")]
    Read(#[source] std::io::Error),
    #[error("store.decode_error")]
    Decode(#[source] serde_json::Error),
    #[error("store.encode_error")]
    Encode(#[source] serde_json::Error),
    #[error("store.write_error")]
    Write(#[source] std::io::Error),
}

impl From<StoreError> for RepositoryError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Read(_) | StoreError::Decode(_) => RepositoryError::load(),
            StoreError::Encode(_) | StoreError::Write(_) => RepositoryError::persistence(),
        }
    }
}

/// Catalog snapshot kept as a JSON array of products on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and decodes the whole catalog, keeping file order.
    pub async fn read_products(&self) -> Result<Vec<Product>, StoreError> {
        let raw = tokio::fs::read(&self.path).await.map_err(StoreError::Read)?;
        let entities: Vec<ProductEntity> =
            serde_json::from_slice(&raw).map_err(StoreError::Decode)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    /// Replaces the file contents. Writes a sibling temp file first, then renames it over the target.
    pub async fn write_products(&self, products: &[Product]) -> Result<(), StoreError> {
        let entities: Vec<ProductEntity> = products.iter().map(ProductEntity::from_domain).collect();
        let data = serde_json::to_vec_pretty(&entities).map_err(StoreError::Encode)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data)
            .await
            .map_err(StoreError::Write)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::Write)
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.read_products().await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = ?e, "failed to load catalog");
            RepositoryError::from(e)
        })?;

        tracing::info!(path = %self.path.display(), count = products.len(), "catalog loaded");
        Ok(products)
    }

    async fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        self.write_products(products).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = ?e, "failed to save catalog");
            RepositoryError::from(e)
        })
    }
}
