//! Product catalog: the single lookup table from product codes to categories.

use super::category::{Category, CategoryCode, MembershipGroup, RenewalMode};
use crate::domain::foundation::ValidationError;

/// Default product code for private memberships with automatic renewal.
pub const PRIVATE_AUTO_PRODUCT: u32 = 9503;
/// Default product code for private memberships with manual renewal.
pub const PRIVATE_MANUAL_PRODUCT: u32 = 10968;
/// Default product code for pension memberships with automatic renewal.
pub const PENSION_AUTO_PRODUCT: u32 = 28736;
/// Default product code for pension memberships with manual renewal.
pub const PENSION_MANUAL_PRODUCT: u32 = 28735;
/// Default product code for union memberships with automatic renewal.
pub const UNION_AUTO_PRODUCT: u32 = 30734;
/// Default product code for union memberships with manual renewal.
pub const UNION_MANUAL_PRODUCT: u32 = 19221;

const CATEGORIES: [Category; 6] = [
    Category::new(MembershipGroup::Private, RenewalMode::Auto),
    Category::new(MembershipGroup::Private, RenewalMode::Manual),
    Category::new(MembershipGroup::Pension, RenewalMode::Auto),
    Category::new(MembershipGroup::Pension, RenewalMode::Manual),
    Category::new(MembershipGroup::Union, RenewalMode::Auto),
    Category::new(MembershipGroup::Union, RenewalMode::Manual),
];

/// Immutable mapping of the six membership products to their categories.
///
/// Built once (from defaults or configuration) and shared by every
/// record source and statistics handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    /// Codes in the same order as `CATEGORIES`.
    codes: [CategoryCode; 6],
}

impl ProductCatalog {
    /// Builds a catalog from one code per category.
    ///
    /// Codes must be non-zero and pairwise distinct.
    pub fn new(
        private_auto: u32,
        private_manual: u32,
        pension_auto: u32,
        pension_manual: u32,
        union_auto: u32,
        union_manual: u32,
    ) -> Result<Self, ValidationError> {
        let raw = [
            private_auto,
            private_manual,
            pension_auto,
            pension_manual,
            union_auto,
            union_manual,
        ];

        for (i, code) in raw.iter().enumerate() {
            if *code == 0 {
                return Err(ValidationError::empty_field(format!(
                    "catalog.{}",
                    CATEGORIES[i].to_string().replace('/', "_")
                )));
            }
            if raw[..i].contains(code) {
                return Err(ValidationError::invalid_format(
                    "catalog",
                    format!("product code {} assigned to more than one category", code),
                ));
            }
        }

        Ok(Self {
            codes: raw.map(CategoryCode::new),
        })
    }

    /// Returns the category of a product code, if it is a membership product.
    pub fn classify(&self, code: CategoryCode) -> Option<Category> {
        self.codes
            .iter()
            .position(|c| *c == code)
            .map(|i| CATEGORIES[i])
    }

    /// Returns the group of a product code.
    pub fn group_of(&self, code: CategoryCode) -> Option<MembershipGroup> {
        self.classify(code).map(|c| c.group)
    }

    /// Returns the renewal mode of a product code.
    pub fn renewal_of(&self, code: CategoryCode) -> Option<RenewalMode> {
        self.classify(code).map(|c| c.renewal)
    }

    /// Returns the product code of a category.
    pub fn code_for(&self, category: Category) -> CategoryCode {
        let i = CATEGORIES
            .iter()
            .position(|c| *c == category)
            .unwrap_or_default();
        self.codes[i]
    }

    /// Returns the two codes (auto, manual) of a group.
    pub fn codes_for(&self, group: MembershipGroup) -> [CategoryCode; 2] {
        [
            self.code_for(Category::new(group, RenewalMode::Auto)),
            self.code_for(Category::new(group, RenewalMode::Manual)),
        ]
    }

    /// Returns every membership product code.
    pub fn all_codes(&self) -> &[CategoryCode] {
        &self.codes
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            codes: [
                PRIVATE_AUTO_PRODUCT,
                PRIVATE_MANUAL_PRODUCT,
                PENSION_AUTO_PRODUCT,
                PENSION_MANUAL_PRODUCT,
                UNION_AUTO_PRODUCT,
                UNION_MANUAL_PRODUCT,
            ]
            .map(CategoryCode::new),
        }
    }
}
