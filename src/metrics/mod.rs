//! Optional selector metrics (enabled with the `metrics` feature).
//!
//! Recording, snapshotting and export are separate concerns:
//!
//! ```text
//!   TopNSelector ──record_*──► TopNMetrics ──snapshot──► TopNMetricsSnapshot
//!                                                              │
//!                                                              ▼
//!                                                   MetricsExporter (Prometheus text)
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::TopNMetrics;
pub use snapshot::TopNMetricsSnapshot;
pub use traits::{
    MetricsExporter, MetricsReset, MetricsSnapshotProvider, TopNMetricsReadRecorder,
    TopNMetricsRecorder,
};
