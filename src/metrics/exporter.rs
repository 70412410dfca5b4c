use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::metrics::snapshot::TopNMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for selector metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector. Write errors are
/// ignored; metrics never fail the caller.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self.lock();
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self.lock();
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<TopNMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &TopNMetricsSnapshot) {
        self.write_counter(&self.metric_name("offer_calls_total"), snapshot.offer_calls);
        self.write_counter(&self.metric_name("offer_grows_total"), snapshot.offer_grows);
        self.write_counter(
            &self.metric_name("offer_replaces_total"),
            snapshot.offer_replaces,
        );
        self.write_counter(
            &self.metric_name("offer_rejects_total"),
            snapshot.offer_rejects,
        );
        self.write_counter(
            &self.metric_name("sift_up_steps_total"),
            snapshot.sift_up_steps,
        );
        self.write_counter(
            &self.metric_name("sift_down_steps_total"),
            snapshot.sift_down_steps,
        );
        self.write_counter(&self.metric_name("drain_calls_total"), snapshot.drain_calls);
        self.write_counter(
            &self.metric_name("drained_entries_total"),
            snapshot.drained_entries,
        );
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_counter(
            &self.metric_name("peek_min_calls_total"),
            snapshot.peek_min_calls,
        );
        self.write_counter(
            &self.metric_name("peek_min_found_total"),
            snapshot.peek_min_found,
        );
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
