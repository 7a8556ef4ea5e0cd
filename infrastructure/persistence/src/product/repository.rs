use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product, ProductId};
use business::domain::product::repository::ProductRepository;
use business::domain::product::store::ProductStore;

struct Catalog {
    products: Vec<Product>,
    /// `None` once `ProductId::MAX` has been handed out.
    next_id: Option<ProductId>,
}

impl Catalog {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

/// In-memory ordered catalog. Every mutation runs under the write lock and
/// is followed by a best-effort snapshot to the backing store.
pub struct ProductRepositoryInMemory {
    catalog: RwLock<Catalog>,
    store: Arc<dyn ProductStore>,
}

impl ProductRepositoryInMemory {
    /// Identifiers continue after the highest seeded id and are never reused.
    pub fn new(products: Vec<Product>, store: Arc<dyn ProductStore>) -> Self {
        let next_id = products
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .max(0)
            .checked_add(1);
        if next_id.is_none() {
            tracing::warn!("seeded catalog already uses the largest id; creates will fail");
        }
        Self {
            catalog: RwLock::new(Catalog { products, next_id }),
            store,
        }
    }

    /// Seeds the catalog from the store.
    pub async fn load(store: Arc<dyn ProductStore>) -> Result<Self, RepositoryError> {
        let products = store.load().await?;
        Ok(Self::new(products, store))
    }

    async fn persist(&self, products: &[Product]) {
        if let Err(e) = self.store.save(products).await {
            tracing::warn!(error = %e, "catalog snapshot not saved; change kept in memory");
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.catalog.read().await.products.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.catalog
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, props: NewProductProps) -> Result<Product, RepositoryError> {
        let mut catalog = self.catalog.write().await;

        let id = catalog.next_id.ok_or(RepositoryError::IdsExhausted)?;
        catalog.next_id = id.checked_add(1);

        let product = props.with_id(id);
        catalog.products.push(product.clone());

        self.persist(&catalog.products).await;
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut catalog = self.catalog.write().await;

        let index = catalog
            .position(product.id)
            .ok_or(RepositoryError::NotFound)?;
        catalog.products[index] = product.clone();

        self.persist(&catalog.products).await;
        Ok(product.clone())
    }

    async fn update_name(&self, id: ProductId, name: &str) -> Result<Product, RepositoryError> {
        let mut catalog = self.catalog.write().await;

        let index = catalog.position(id).ok_or(RepositoryError::NotFound)?;
        catalog.products[index].name = name.to_string();
        let renamed = catalog.products[index].clone();

        self.persist(&catalog.products).await;
        Ok(renamed)
    }

    async fn search(&self, price_gt: f64) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .catalog
            .read()
            .await
            .products
            .iter()
            .filter(|p| p.price > price_gt)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut catalog = self.catalog.write().await;

        let index = catalog.position(id).ok_or(RepositoryError::NotFound)?;
        catalog.products.remove(index);

        self.persist(&catalog.products).await;
        Ok(())
    }

    async fn find_published_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError> {
        let catalog = self.catalog.read().await;

        let mut matched = Vec::new();
        for id in ids {
            matched.extend(
                catalog
                    .products
                    .iter()
                    .filter(|p| p.id == *id && p.is_published)
                    .cloned(),
            );
        }
        Ok(matched)
    }
}
