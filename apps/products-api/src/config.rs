//! Configuration for Products API

use core_config::{app_info, env_flag, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Start the catalog with the demo product `uno`
    pub seed_products: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_products = env_flag("SEED_PRODUCTS", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            ["APP_ENV", "HOST", "PORT", "API_BASE_PATH", "SEED_PRODUCTS"],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "products_api");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.server.base_path, "/bp");
                assert!(config.environment.is_development());
                assert!(config.seed_products);
            },
        );
    }

    #[test]
    fn test_config_overrides() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("3002")),
                ("API_BASE_PATH", Some("/catalog/")),
                ("SEED_PRODUCTS", Some("false")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3002);
                assert_eq!(config.server.base_path, "/catalog");
                assert!(config.environment.is_production());
                assert!(!config.seed_products);
            },
        );
    }

    #[test]
    fn test_invalid_seed_flag_is_an_error() {
        temp_env::with_var("SEED_PRODUCTS", Some("maybe"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
