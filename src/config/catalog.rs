//! Product catalog configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::membership::{
    ProductCatalog, PENSION_AUTO_PRODUCT, PENSION_MANUAL_PRODUCT, PRIVATE_AUTO_PRODUCT,
    PRIVATE_MANUAL_PRODUCT, UNION_AUTO_PRODUCT, UNION_MANUAL_PRODUCT,
};

/// Commerce product ids of the six membership categories
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_private_auto")]
    pub private_auto: u32,

    #[serde(default = "default_private_manual")]
    pub private_manual: u32,

    #[serde(default = "default_pension_auto")]
    pub pension_auto: u32,

    #[serde(default = "default_pension_manual")]
    pub pension_manual: u32,

    #[serde(default = "default_union_auto")]
    pub union_auto: u32,

    #[serde(default = "default_union_manual")]
    pub union_manual: u32,
}

impl CatalogConfig {
    /// Build the immutable catalog from the configured ids
    pub fn to_catalog(&self) -> Result<ProductCatalog, ValidationError> {
        ProductCatalog::new(
            self.private_auto,
            self.private_manual,
            self.pension_auto,
            self.pension_manual,
            self.union_auto,
            self.union_manual,
        )
        .map_err(|e| ValidationError::InvalidCatalog(e.to_string()))
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_catalog().map(|_| ())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            private_auto: default_private_auto(),
            private_manual: default_private_manual(),
            pension_auto: default_pension_auto(),
            pension_manual: default_pension_manual(),
            union_auto: default_union_auto(),
            union_manual: default_union_manual(),
        }
    }
}

fn default_private_auto() -> u32 {
    PRIVATE_AUTO_PRODUCT
}

fn default_private_manual() -> u32 {
    PRIVATE_MANUAL_PRODUCT
}

fn default_pension_auto() -> u32 {
    PENSION_AUTO_PRODUCT
}

fn default_pension_manual() -> u32 {
    PENSION_MANUAL_PRODUCT
}

fn default_union_auto() -> u32 {
    UNION_AUTO_PRODUCT
}

fn default_union_manual() -> u32 {
    UNION_MANUAL_PRODUCT
}
