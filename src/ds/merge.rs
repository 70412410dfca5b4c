//! K-way merge of descending entry runs.
//!
//! Parallel scoring keeps one [`TopNSelector`](crate::ds::TopNSelector) per
//! worker. Each worker drains its selector into a descending run; this module
//! merges those runs into a single descending ranking without re-sorting.
//!
//! ```text
//!   worker 0: (d,9) (b,5) (c,3)  ─┐
//!   worker 1: (x,8) (y,4)        ─┼─► heads heap ─► (d,9) (x,8) (b,5) ...
//!   worker 2: (q,7)              ─┘
//! ```
//!
//! Each output entry costs one heap pop and at most one push, so producing
//! `limit` entries from `r` runs is O(limit · log r).
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::ds::entry::{Entry, compare};

struct Head<K, S> {
    entry: Entry<K, S>,
    run: usize,
}

impl<K: Ord, S: PartialOrd> PartialEq for Head<K, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, S: PartialOrd> Eq for Head<K, S> {}

impl<K: Ord, S: PartialOrd> PartialOrd for Head<K, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, S: PartialOrd> Ord for Head<K, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier runs win exact ties so the merge is stable across runs.
        compare(&self.entry, &other.entry).then_with(|| other.run.cmp(&self.run))
    }
}

/// Merges descending runs into one descending vector of at most `limit`
/// entries.
///
/// Every run must already be in descending order (as produced by
/// [`TopNSelector::drain_sorted`](crate::ds::TopNSelector::drain_sorted)).
/// Pass `usize::MAX` to keep everything.
///
/// # Example
///
/// ```
/// use topnkit::ds::{TopNSelector, merge_sorted};
///
/// let mut left = TopNSelector::new(2).unwrap();
/// let mut right = TopNSelector::new(2).unwrap();
/// left.extend([("a", 1), ("b", 5), ("c", 3)]);
/// right.extend([("d", 9), ("e", 2)]);
///
/// let merged = merge_sorted([left.drain_sorted(), right.drain_sorted()], 3);
/// let keys: Vec<&str> = merged.iter().map(|e| *e.key()).collect();
/// assert_eq!(keys, vec!["d", "b", "c"]);
/// ```
pub fn merge_sorted<K, S, R>(runs: impl IntoIterator<Item = R>, limit: usize) -> Vec<Entry<K, S>>
where
    K: Ord,
    S: PartialOrd,
    R: IntoIterator<Item = Entry<K, S>>,
{
    let mut iters: Vec<R::IntoIter> = runs.into_iter().map(IntoIterator::into_iter).collect();
    let mut heads = BinaryHeap::with_capacity(iters.len());
    for (run, iter) in iters.iter_mut().enumerate() {
        if let Some(entry) = iter.next() {
            heads.push(Head { entry, run });
        }
    }

    let mut merged = Vec::with_capacity(limit.min(heads.len().saturating_mul(4)));
    while merged.len() < limit {
        let Some(Head { entry, run }) = heads.pop() else {
            break;
        };
        if let Some(next) = iters[run].next() {
            heads.push(Head { entry: next, run });
        }
        merged.push(entry);
    }
    merged
}
