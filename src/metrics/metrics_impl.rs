use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{TopNMetricsReadRecorder, TopNMetricsRecorder};

#[derive(Debug, Default)]
pub struct TopNMetrics {
    pub offer_calls: u64,
    pub offer_grows: u64,
    pub offer_replaces: u64,
    pub offer_rejects: u64,
    pub sift_up_steps: u64,
    pub sift_down_steps: u64,
    pub drain_calls: u64,
    pub drained_entries: u64,
    pub clear_calls: u64,
    pub peek_min_calls: MetricsCell,
    pub peek_min_found: MetricsCell,
}

impl TopNMetrics {
    pub fn new() -> TopNMetrics {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl TopNMetricsRecorder for TopNMetrics {
    fn record_offer_call(&mut self) {
        self.offer_calls += 1;
    }

    fn record_offer_grow(&mut self) {
        self.offer_grows += 1;
    }

    fn record_offer_replace(&mut self) {
        self.offer_replaces += 1;
    }

    fn record_offer_reject(&mut self) {
        self.offer_rejects += 1;
    }

    fn record_sift_up_steps(&mut self, steps: u64) {
        self.sift_up_steps += steps;
    }

    fn record_sift_down_steps(&mut self, steps: u64) {
        self.sift_down_steps += steps;
    }

    fn record_drain_call(&mut self) {
        self.drain_calls += 1;
    }

    fn record_drained_entries(&mut self, count: u64) {
        self.drained_entries += count;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl TopNMetricsReadRecorder for &TopNMetrics {
    fn record_peek_min_call(&self) {
        self.peek_min_calls.incr();
    }

    fn record_peek_min_found(&self) {
        self.peek_min_found.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_accumulates_steps() {
        let mut metrics = TopNMetrics::new();
        metrics.record_sift_up_steps(3);
        metrics.record_sift_up_steps(2);
        metrics.record_sift_down_steps(4);
        assert_eq!(metrics.sift_up_steps, 5);
        assert_eq!(metrics.sift_down_steps, 4);
    }

    #[test]
    fn read_recorder_works_through_shared_ref() {
        let metrics = TopNMetrics::new();
        (&metrics).record_peek_min_call();
        (&metrics).record_peek_min_found();
        assert_eq!(metrics.peek_min_calls.get(), 1);
        assert_eq!(metrics.peek_min_found.get(), 1);
    }

    #[test]
    fn reset_clears_all_counters() {
        let mut metrics = TopNMetrics::new();
        metrics.record_offer_call();
        metrics.record_offer_reject();
        (&metrics).record_peek_min_call();
        metrics.reset();
        assert_eq!(metrics.offer_calls, 0);
        assert_eq!(metrics.offer_rejects, 0);
        assert_eq!(metrics.peek_min_calls.get(), 0);
    }
}
