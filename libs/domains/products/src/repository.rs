use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductPatch};

/// Repository trait for Product persistence
///
/// Implementations own uniqueness of `id`: `create` must reject a duplicate
/// without touching the stored set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Whether a product with this id is stored
    async fn exists(&self, id: &str) -> ProductResult<bool>;

    /// Get a product by id
    async fn get(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Append a product; fails with `DuplicateIdentifier` if the id is taken
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Merge `patch` into the stored record; `None` when the id is unknown
    async fn update(&self, id: &str, patch: ProductPatch) -> ProductResult<Option<Product>>;

    /// Remove a product; `false` when the id is unknown
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}
