//! Statistics configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::statistics::SamplingMode;

/// Which implementation backs the membership record store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSourceKind {
    /// Dedicated membership metadata table (canonical).
    #[default]
    MetadataTable,
    /// Records reconstructed from commerce orders.
    CommerceOrders,
}

/// Statistics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsConfig {
    /// Postcode that counts as "local" in the union split
    #[serde(default = "default_local_postcode")]
    pub local_postcode: String,

    /// Sampling density for active-member series
    #[serde(default)]
    pub sampling: SamplingMode,

    /// Record store selected for this deployment
    #[serde(default)]
    pub record_source: RecordSourceKind,
}

impl StatisticsConfig {
    /// Validate statistics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let postcode = self.local_postcode.trim();
        if postcode.is_empty() || !postcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPostcode(self.local_postcode.clone()));
        }
        Ok(())
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            local_postcode: default_local_postcode(),
            sampling: SamplingMode::default(),
            record_source: RecordSourceKind::default(),
        }
    }
}

fn default_local_postcode() -> String {
    "4293".to_string()
}
