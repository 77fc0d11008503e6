//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<InMemoryProductRepository>,
}

impl AppState {
    /// Builds the catalog, seeded or empty depending on configuration
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_products {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };

        Self {
            config,
            products: ProductService::new(repository),
        }
    }
}
