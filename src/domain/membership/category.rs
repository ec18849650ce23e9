//! Membership categories.
//!
//! Every known product code maps to exactly one (group, renewal mode) pair.
//! Groups are the three top-level buckets used by every statistic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level membership group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipGroup {
    /// Individual membership.
    Private,
    /// Individual membership at the pensioner rate.
    Pension,
    /// Union / organization membership.
    Union,
}

impl MembershipGroup {
    pub const ALL: [MembershipGroup; 3] = [
        MembershipGroup::Private,
        MembershipGroup::Pension,
        MembershipGroup::Union,
    ];

    /// Parses a category filter value.
    ///
    /// Empty and unrecognized values mean "no filter" and return `None`.
    pub fn parse_filter(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "private" => Some(MembershipGroup::Private),
            "pension" => Some(MembershipGroup::Pension),
            "union" => Some(MembershipGroup::Union),
            _ => None,
        }
    }

    /// Returns the stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipGroup::Private => "private",
            MembershipGroup::Pension => "pension",
            MembershipGroup::Union => "union",
        }
    }

    /// Returns the display name for this group.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipGroup::Private => "Private",
            MembershipGroup::Pension => "Pension",
            MembershipGroup::Union => "Union",
        }
    }
}

impl fmt::Display for MembershipGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a membership is renewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewalMode {
    /// Subscription renews automatically.
    Auto,
    /// Member repurchases manually.
    Manual,
}

impl RenewalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenewalMode::Auto => "auto",
            RenewalMode::Manual => "manual",
        }
    }
}

impl fmt::Display for RenewalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (group, renewal mode) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub group: MembershipGroup,
    pub renewal: RenewalMode,
}

impl Category {
    pub const fn new(group: MembershipGroup, renewal: RenewalMode) -> Self {
        Self { group, renewal }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group.as_str(), self.renewal)
    }
}

/// Product code attached to a membership record.
///
/// Any integer is representable; only codes present in the
/// [`ProductCatalog`](super::ProductCatalog) belong to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(u32);

impl CategoryCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
