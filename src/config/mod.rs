//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PMM` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use pro_members_manager::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Local postcode: {}", config.statistics.local_postcode);
//! ```

mod catalog;
mod database;
mod error;
mod logging;
mod statistics;

pub use catalog::CatalogConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use statistics::{RecordSourceKind, StatisticsConfig};

use serde::Deserialize;

use crate::domain::membership::ProductCatalog;

/// Root application configuration
///
/// Every section has defaults; only `database` is optional and is needed
/// when the PostgreSQL adapters are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub statistics: StatisticsConfig,

    /// Membership product ids
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// PostgreSQL connection (metadata table, snapshots)
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PMM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PMM__STATISTICS__LOCAL_POSTCODE=4293` -> `statistics.local_postcode`
    /// - `PMM__CATALOG__UNION_MANUAL=19221` -> `catalog.union_manual`
    /// - `PMM__DATABASE__URL=...` -> `database.url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("PMM").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.statistics.validate()?;
        self.catalog.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.logging.validate()?;
        Ok(())
    }

    /// Immutable product catalog for handlers and adapters
    pub fn product_catalog(&self) -> Result<ProductCatalog, ValidationError> {
        self.catalog.to_catalog()
    }
}
