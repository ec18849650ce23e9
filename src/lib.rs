//! Pro Members Manager - Membership statistics core
//!
//! Reconstructs which memberships were in force on any historical day and
//! rolls them up by category. On top of that census sit a down-sampled
//! time series, a creation-window aggregate report and daily snapshots
//! for growth reporting.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
