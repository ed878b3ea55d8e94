//! Domain building blocks for the Daily Diet API.
//!
//! Everything here is free of I/O: identifier and timestamp types, the
//! shared error taxonomy, meal field validation, and the metrics
//! aggregation used by the `/meals/metrics` endpoint.

pub mod error;
pub mod meal;
pub mod metrics;
pub mod timestamp;
pub mod types;
pub mod user;
pub mod validation;
