use std::thread;

use topnkit::ds::{TopNSelector, merge_sorted};

fn main() {
    let scores: Vec<(u32, u64)> = (0..1_000u32)
        .map(|id| (id, u64::from(id) * 7919 % 1_000))
        .collect();

    let runs: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = scores
            .chunks(250)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut top: TopNSelector<u32, u64> = TopNSelector::new(3).unwrap();
                    top.extend(chunk.iter().copied());
                    top.drain_sorted()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for entry in merge_sorted(runs, 3) {
        println!("id={} score={}", entry.key(), entry.score());
    }
}

// Expected output:
// id=321 score=999
// id=642 score=998
// id=963 score=997
//
// Explanation: each of the four workers keeps its own top 3; merging the
// drained runs yields the same result as one selector over all 1000 ids.
