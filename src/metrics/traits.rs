//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are split into small traits so that
//! selector code only ever writes counters, benches/tests only read
//! snapshots, and production code only publishes them.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │   TopNMetricsRecorder        │   │   TopNMetricsReadRecorder    │
//!   │   offer/grow/replace/reject  │   │   peek_min (&self paths)     │
//!   │   sift steps/drain/clear     │   │                              │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └─────────────┬────────────────────┘
//!                                ▼
//!                          TopNMetrics
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters written by `&mut self` selector operations.
pub trait TopNMetricsRecorder {
    fn record_offer_call(&mut self);
    /// Candidate accepted while the selector was below capacity.
    fn record_offer_grow(&mut self);
    /// Candidate replaced the current minimum of a full selector.
    fn record_offer_replace(&mut self);
    fn record_offer_reject(&mut self);
    fn record_sift_up_steps(&mut self, steps: u64);
    fn record_sift_down_steps(&mut self, steps: u64);
    fn record_drain_call(&mut self);
    fn record_drained_entries(&mut self, count: u64);
    fn record_clear(&mut self);
}

/// Counters written by `&self` selector operations (interior mutability).
pub trait TopNMetricsReadRecorder {
    fn record_peek_min_call(&self);
    fn record_peek_min_found(&self);
}

/// Produce a point-in-time snapshot for tests and benchmarks.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
