//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, calendar values, errors)
//! - `membership` - Membership records, categories and the product catalog
//! - `statistics` - Census, time series, aggregates and growth computations

pub mod foundation;
pub mod membership;
pub mod statistics;
