//! DHAT heap profiler for topnkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Besides writing the profile, each scenario checks with `dhat::HeapStats`
//! that the offer loop performs no heap allocation once the selector exists.

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use topnkit::ds::{TopNSelector, merge_sorted};
use topnkit::rec::{PopularityRecommender, PreferenceData};
use topnkit::traits::Recommender;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Offers `operations` random candidates and reports allocations made by the
/// offer loop alone.
fn offer_stream(selector: &mut TopNSelector<u64, f64>, operations: usize, seed: u64) -> u64 {
    let mut rng = XorShift64::new(seed);
    let before = dhat::HeapStats::get();
    for i in 0..operations {
        selector.offer(i as u64, rng.next_f64());
    }
    let after = dhat::HeapStats::get();
    after.total_blocks - before.total_blocks
}

fn profile_stream(capacity: usize, operations: usize) {
    println!("=== Profiling stream (capacity {}) ===", capacity);

    let Ok(mut selector) = TopNSelector::new(capacity) else {
        println!("  invalid capacity");
        return;
    };
    let allocations = offer_stream(&mut selector, operations, 42);
    let ranked = selector.drain_sorted();

    println!("  Offer-loop allocations: {}", allocations);
    println!("  Retained: {}", ranked.len());
    assert_eq!(allocations, 0, "offer must not allocate");
}

fn profile_sharded(shards: usize, capacity: usize, operations: usize) {
    println!("=== Profiling {} shards + merge ===", shards);

    let mut runs = Vec::with_capacity(shards);
    for shard in 0..shards {
        let Ok(mut selector) = TopNSelector::new(capacity) else {
            return;
        };
        offer_stream(&mut selector, operations / shards, shard as u64 + 1);
        runs.push(selector.drain_sorted());
    }
    let merged = merge_sorted(runs, capacity);

    println!("  Merged: {}", merged.len());
}

fn profile_popularity(users: u64, items: u64, interactions: usize) {
    println!("=== Profiling popularity ===");

    let mut rng = XorShift64::new(7);
    let pairs = (0..interactions).map(|_| {
        let user = rng.next_u64() % users;
        // Skew toward low item ids so popularity is uneven.
        let item = (rng.next_f64() * rng.next_f64() * items as f64) as u64;
        (user, item)
    });
    let data = PreferenceData::from_pairs(pairs);
    let rec = PopularityRecommender::new(&data);

    let candidates: Vec<u64> = (0..items).collect();
    let mut rows = 0;
    for user in data.users().iter().take(1_000) {
        rows += rec.recommend_candidates(user, &candidates, 20).len();
    }

    println!("  Items ranked: {}", rec.ranking().len());
    println!("  Rows produced: {}", rows);
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("topnkit DHAT Heap Profiling");
    println!("===========================\n");

    profile_stream(100, 1_000_000);
    profile_stream(10_000, 1_000_000);
    profile_sharded(8, 1_000, 1_000_000);
    profile_popularity(10_000, 50_000, 500_000);

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
