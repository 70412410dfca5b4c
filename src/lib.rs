//! topnkit: bounded top-N selection and the ranking pipeline built on it.
//!
//! - [`ds::TopNSelector`] keeps the N greatest `(key, score)` entries of a
//!   stream in O(N) memory and O(log N) per offer.
//! - [`rec`] scores items by popularity and streams per-user ranked lists.
//!
//! Enable the `metrics` feature for selector counters and a Prometheus text
//! exporter.

pub mod ds;
pub mod error;
pub mod rec;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
