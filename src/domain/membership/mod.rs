//! Membership domain module.
//!
//! Membership records, their categories and the product catalog that
//! classifies them.
//!
//! # Module Structure
//!
//! - `category` - Groups, renewal modes and product codes
//! - `catalog` - ProductCatalog lookup table
//! - `record` - MembershipRecord and its activity window

mod catalog;
mod category;
mod record;

pub use catalog::{
    ProductCatalog, PENSION_AUTO_PRODUCT, PENSION_MANUAL_PRODUCT, PRIVATE_AUTO_PRODUCT,
    PRIVATE_MANUAL_PRODUCT, UNION_AUTO_PRODUCT, UNION_MANUAL_PRODUCT,
};
pub use category::{Category, CategoryCode, MembershipGroup, RenewalMode};
pub use record::{ActivityWindow, DateField, MalformedRecord, MembershipRecord, ACTIVE_STATUS};
