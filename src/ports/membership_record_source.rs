//! Membership record source port.
//!
//! The single read contract every statistic goes through. Two adapters
//! exist: the dedicated metadata table (canonical) and a reconstruction
//! from commerce orders. A deployment selects exactly one.
//!
//! # Example
//!
//! ```ignore
//! async fn active_private_rows(
//!     source: &dyn MembershipRecordSource,
//!     catalog: &ProductCatalog,
//! ) -> Result<Vec<MembershipRecord>, DomainError> {
//!     let filter = RecordFilter::active()
//!         .with_codes(catalog.codes_for(MembershipGroup::Private).to_vec());
//!     source.fetch(&filter).await
//! }
//! ```

use crate::domain::foundation::DomainError;
use crate::domain::membership::{CategoryCode, MembershipRecord, ACTIVE_STATUS};
use async_trait::async_trait;

/// Reader port for membership records.
///
/// Implementations return raw records; date parsing and activity checks
/// happen in the domain so malformed rows can be excluded individually.
/// A failure to reach storage at all is reported as
/// `ErrorCode::DatabaseError`.
#[async_trait]
pub trait MembershipRecordSource: Send + Sync {
    /// Fetch records matching the filter.
    ///
    /// Filters are a pushdown hint: callers re-check status and codes, so an
    /// implementation may return a superset.
    async fn fetch(&self, filter: &RecordFilter) -> Result<Vec<MembershipRecord>, DomainError>;

    /// Count every record regardless of status or date validity.
    async fn count_all(&self) -> Result<u64, DomainError>;

    /// Short name used in logs.
    fn source_name(&self) -> &'static str;
}

/// Selection criteria for [`MembershipRecordSource::fetch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact status to match; `None` matches every status.
    pub status: Option<String>,

    /// Product codes to match; `None` matches every code, known or not.
    pub codes: Option<Vec<CategoryCode>>,
}

impl RecordFilter {
    /// Matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches records whose status is `"active"`.
    pub fn active() -> Self {
        Self {
            status: Some(ACTIVE_STATUS.to_string()),
            codes: None,
        }
    }

    /// Restricts to the given product codes.
    pub fn with_codes(mut self, codes: Vec<CategoryCode>) -> Self {
        self.codes = Some(codes);
        self
    }

    /// Returns true if a record passes this filter.
    pub fn matches(&self, record: &MembershipRecord) -> bool {
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |status| record.status == status);
        let code_ok = self
            .codes
            .as_ref()
            .map_or(true, |codes| codes.contains(&record.category_code));
        status_ok && code_ok
    }
}
