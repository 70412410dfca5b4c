#![no_main]

use libfuzzer_sys::fuzz_target;
use topnkit::ds::{TopNSelector, merge_sorted};

// Fuzz sharded selection: splitting candidates across selectors and merging
// the drained runs must equal a single selector over all candidates.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let shards = usize::from(data[0] % 8) + 1;
    let capacity = usize::from(data[1] % 16) + 1;
    let candidates: Vec<(u8, u8)> = data[2..].chunks_exact(2).map(|c| (c[0], c[1])).collect();

    let mut single: TopNSelector<u8, u8> = TopNSelector::new(capacity).unwrap();
    single.extend(candidates.iter().copied());

    let mut runs = Vec::with_capacity(shards);
    for shard in 0..shards {
        let mut top: TopNSelector<u8, u8> = TopNSelector::new(capacity).unwrap();
        top.extend(candidates.iter().skip(shard).step_by(shards).copied());
        runs.push(top.drain_sorted());
    }

    let merged = merge_sorted(runs, capacity);
    assert!(merged.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(merged, single.drain_sorted());
});
