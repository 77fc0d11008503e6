//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPatch};
use crate::repository::ProductRepository;

/// Product service providing the catalog operations
///
/// Validates input before it reaches the repository and turns missing
/// records into `ProductError::NotFound`.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products in insertion order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Whether an identifier is already taken
    #[instrument(skip(self))]
    pub async fn verify_identifier(&self, id: &str) -> ProductResult<bool> {
        self.repository.exists(id).await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Add a product to the catalog
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create_product(&self, product: Product) -> ProductResult<Product> {
        product.validate()?;

        let created = self.repository.create(product).await?;
        info!(id = %created.id, "Product added");
        Ok(created)
    }

    /// Merge `patch` into an existing product
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
        patch.validate()?;

        let updated = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        info!(id = %updated.id, "Product updated");
        Ok(updated)
    }

    /// Remove a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }

        info!(id, "Product removed");
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
