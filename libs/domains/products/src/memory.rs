//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPatch};
use crate::repository::ProductRepository;

const SEED_RELEASE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Demo product the catalog starts with
pub fn seed_products() -> Vec<Product> {
    vec![Product {
        id: "uno".to_string(),
        name: "nombre producto".to_string(),
        description: "Descripción producto".to_string(),
        logo: "https://www.visa.com.ec/dam/VCOM/regional/lac/SPA/Default/Pay%20With%20Visa/Tarjetas/visa-signature-400x225.jpg".to_string(),
        date_release: SEED_RELEASE,
        date_revision: SEED_RELEASE,
    }]
}

/// Process-local product catalog.
///
/// Records live in insertion order behind a single lock; every lookup is a
/// linear scan. Nothing is persisted across restarts.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with `products`, in order
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Catalog containing the demo product `uno`
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn exists(&self, id: &str) -> ProductResult<bool> {
        Ok(self.products.read().await.iter().any(|p| p.id == id))
    }

    async fn get(&self, id: &str) -> ProductResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(ProductError::DuplicateIdentifier(product.id));
        }

        products.push(product.clone());
        debug!(id = %product.id, total = products.len(), "Stored product");
        Ok(product)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(existing) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        existing.apply(patch);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}
