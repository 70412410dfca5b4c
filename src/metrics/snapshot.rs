/// Point-in-time copy of a selector's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TopNMetricsSnapshot {
    pub offer_calls: u64,
    pub offer_grows: u64,
    pub offer_replaces: u64,
    pub offer_rejects: u64,

    pub sift_up_steps: u64,
    pub sift_down_steps: u64,

    pub drain_calls: u64,
    pub drained_entries: u64,
    pub clear_calls: u64,

    pub peek_min_calls: u64,
    pub peek_min_found: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl TopNMetricsSnapshot {
    /// Fraction of offers that were retained (grow or replace).
    pub fn acceptance_ratio(&self) -> f64 {
        if self.offer_calls == 0 {
            return 0.0;
        }
        (self.offer_grows + self.offer_replaces) as f64 / self.offer_calls as f64
    }
}
