//! Bounded top-N selector over `(key, score)` streams.
//!
//! Keeps the `capacity` greatest entries seen so far, ordered by score and
//! then key (see [`Entry`]). The retained set lives in a binary **min**-heap
//! so the weakest retained entry, the one a new candidate has to beat, is
//! always at the root.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       TopNSelector Layout (capacity 5)                  │
//! │                                                                         │
//! │   entries: Vec<Entry<K, S>>   allocated once, never grows past 5        │
//! │                                                                         │
//! │     index:   0        1        2        3        4                      │
//! │            ┌────────┬────────┬────────┬────────┬────────┐               │
//! │            │ (c, 3) │ (b, 5) │ (d, 9) │ (f, 7) │   --   │               │
//! │            └────────┴────────┴────────┴────────┴────────┘               │
//! │              ▲ root = current minimum (admission threshold)             │
//! │                                                                         │
//! │     children of i: 2i+1, 2i+2     entry[i] <= entry[child]              │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! Offer Flow
//! ──────────
//!   offer(k, s):
//!     len < capacity  → push at len, sift up            → true
//!     (k, s) <= root  → reject, no mutation             → false
//!     otherwise       → overwrite root, sift down       → true
//!
//! Drain Flow
//! ──────────
//!   drain_sorted():
//!     for end in (1..len).rev():
//!       swap(0, end); sift_down(0, end)   // minimum parks at `end`
//!     entries are now descending; move them out, len = 0
//! ```
//!
//! ## Operations
//!
//! | Operation       | Description                                | Complexity   |
//! |-----------------|--------------------------------------------|--------------|
//! | `offer`         | Retain candidate if it beats the minimum   | O(log n)     |
//! | `peek_min`      | Current admission threshold                | O(1)         |
//! | `would_accept`  | Admission test without mutation            | O(1)         |
//! | `drain_sorted`  | Remove everything, descending order        | O(n log n)   |
//! | `check_invariants` | Verify size bound and heap property     | O(n)         |
//!
//! ## Tie-breaking
//!
//! Admission is strictly-greater: a candidate whose score ties the root is
//! kept only if its key is strictly greater than the root's key. The retained
//! set therefore depends only on the candidate multiset, never on arrival
//! order.
//!
//! ## Example Usage
//!
//! ```
//! use topnkit::ds::TopNSelector;
//!
//! let mut top = TopNSelector::new(3).unwrap();
//! for (key, score) in [("a", 1.0), ("b", 5.0), ("c", 3.0), ("d", 9.0), ("e", 2.0)] {
//!     top.offer(key, score);
//! }
//!
//! let ranked: Vec<(&str, f64)> = top.drain_sorted().into_iter().map(Into::into).collect();
//! assert_eq!(ranked, vec![("d", 9.0), ("b", 5.0), ("c", 3.0)]);
//! assert!(top.is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! `TopNSelector` is single-writer. For parallel scoring run one selector per
//! worker and combine the drained runs with
//! [`merge_sorted`](crate::ds::merge_sorted).

use std::cmp::Ordering;

use crate::ds::entry::{Entry, compare, compare_parts};
use crate::error::{ConfigError, InvariantError};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::TopNMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::TopNMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, TopNMetricsReadRecorder, TopNMetricsRecorder,
};

/// Retains the `capacity` greatest `(key, score)` entries offered to it.
///
/// # Type Parameters
///
/// - `K`: Key type, totally ordered (`Ord`); breaks score ties
/// - `S`: Score type (`PartialOrd`); must not produce incomparable values
///
/// # Example
///
/// ```
/// use topnkit::ds::TopNSelector;
///
/// let mut top = TopNSelector::new(1).unwrap();
/// assert!(top.offer("x", 10.0));
///
/// // Equal score, smaller key: not an improvement
/// assert!(!top.offer("a", 10.0));
/// // Strictly greater score replaces the minimum
/// assert!(top.offer("z", 11.0));
///
/// assert_eq!(top.peek_min().map(|e| *e.key()), Some("z"));
/// ```
#[derive(Debug)]
pub struct TopNSelector<K, S> {
    entries: Vec<Entry<K, S>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: TopNMetrics,
}

impl<K, S> TopNSelector<K, S>
where
    K: Ord,
    S: PartialOrd,
{
    /// Creates a selector retaining at most `capacity` entries.
    ///
    /// Storage for all `capacity` entries is reserved here; later offers
    /// never reallocate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or storage for
    /// `capacity` entries cannot be reserved.
    ///
    /// # Example
    ///
    /// ```
    /// use topnkit::ds::TopNSelector;
    ///
    /// let top: TopNSelector<u32, f64> = TopNSelector::new(10).unwrap();
    /// assert_eq!(top.capacity(), 10);
    /// assert!(TopNSelector::<u32, f64>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| ConfigError::new("capacity too large"))?;
        Ok(Self {
            entries,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: TopNMetrics::default(),
        })
    }

    /// Returns the maximum number of retained entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` once `capacity` entries are retained; from then on a
    /// candidate has to beat [`peek_min`](Self::peek_min) to get in.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Offers a candidate; returns `true` if it was retained.
    ///
    /// While below capacity every candidate is retained. Once full, the
    /// candidate must be strictly greater than the current minimum under the
    /// score-then-key order, in which case the minimum is evicted.
    ///
    /// # Example
    ///
    /// ```
    /// use topnkit::ds::TopNSelector;
    ///
    /// let mut top = TopNSelector::new(2).unwrap();
    /// assert!(top.offer(1, 4));
    /// assert!(top.offer(2, 8));
    /// assert!(!top.offer(3, 1));   // below the minimum
    /// assert!(top.offer(4, 6));    // evicts (1, 4)
    /// assert_eq!(top.len(), 2);
    /// ```
    pub fn offer(&mut self, key: K, score: S) -> bool {
        self.offer_entry(Entry::new(key, score))
    }

    /// Same as [`offer`](Self::offer) for an already-built entry.
    pub fn offer_entry(&mut self, entry: Entry<K, S>) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_offer_call();

        if self.entries.len() < self.capacity {
            self.entries.push(entry);
            let _steps = self.sift_up(self.entries.len() - 1);
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_offer_grow();
                self.metrics.record_sift_up_steps(_steps);
            }
            return true;
        }

        if compare(&entry, &self.entries[0]) != Ordering::Greater {
            #[cfg(feature = "metrics")]
            self.metrics.record_offer_reject();
            return false;
        }

        self.entries[0] = entry;
        let len = self.entries.len();
        let _steps = self.sift_down(0, len);
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_offer_replace();
            self.metrics.record_sift_down_steps(_steps);
        }
        true
    }

    /// Returns `true` if offering `(key, score)` would retain it.
    ///
    /// # Example
    ///
    /// ```
    /// use topnkit::ds::TopNSelector;
    ///
    /// let mut top = TopNSelector::new(1).unwrap();
    /// assert!(top.would_accept(&"a", &1.0));
    /// top.offer("m", 5.0);
    /// assert!(!top.would_accept(&"a", &5.0));
    /// assert!(top.would_accept(&"z", &5.0));
    /// ```
    pub fn would_accept(&self, key: &K, score: &S) -> bool {
        match self.entries.first() {
            Some(min) if self.is_full() => {
                compare_parts(key, score, min.key(), min.score()) == Ordering::Greater
            },
            _ => true,
        }
    }

    /// Returns the smallest retained entry, if any.
    pub fn peek_min(&self) -> Option<&Entry<K, S>> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_min_call();

        let min = self.entries.first();

        #[cfg(feature = "metrics")]
        if min.is_some() {
            (&self.metrics).record_peek_min_found();
        }

        min
    }

    /// Iterates over retained entries in heap (unspecified) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, S>> {
        self.entries.iter()
    }

    /// Removes every retained entry and returns them in descending order.
    ///
    /// The selector is left empty but keeps its storage, so it can be
    /// refilled. Draining an empty selector returns an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use topnkit::ds::TopNSelector;
    ///
    /// let mut top = TopNSelector::new(2).unwrap();
    /// top.offer('a', 5);
    /// top.offer('b', 5);
    /// top.offer('c', 5);
    ///
    /// let ranked: Vec<(char, i32)> = top.drain_sorted().into_iter().map(Into::into).collect();
    /// assert_eq!(ranked, vec![('c', 5), ('b', 5)]);
    /// assert!(top.drain_sorted().is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> Vec<Entry<K, S>> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_drain_call();
            self.metrics
                .record_drained_entries(self.entries.len() as u64);
        }

        self.sort_descending_in_place();
        self.entries.drain(..).collect()
    }

    /// Consumes the selector and returns its entries in descending order.
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, S>> {
        self.sort_descending_in_place();
        self.entries
    }

    /// Drops every retained entry, keeping the allocation.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.entries.clear();
    }

    /// Verifies the size bound and the heap property.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] naming the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.entries.len();
        if len > self.capacity {
            return Err(InvariantError::new(format!(
                "size {} exceeds capacity {}",
                len, self.capacity
            )));
        }
        for child in 1..len {
            let parent = (child - 1) / 2;
            if compare(&self.entries[parent], &self.entries[child]) == Ordering::Greater {
                return Err(InvariantError::new(format!(
                    "heap property violated: index {} is greater than child {}",
                    parent, child
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
        assert!(self.entries.capacity() >= self.capacity);
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.entries.capacity() * std::mem::size_of::<Entry<K, S>>()
    }

    /// Heapsort tail: repeatedly parks the current minimum at the end of the
    /// live range, leaving `entries` in descending order.
    fn sort_descending_in_place(&mut self) {
        let mut end = self.entries.len();
        while end > 1 {
            end -= 1;
            self.entries.swap(0, end);
            self.sift_down(0, end);
        }
    }

    /// Moves `entries[index]` toward the root while it is smaller than its
    /// parent. Returns the number of swaps.
    fn sift_up(&mut self, mut index: usize) -> u64 {
        let mut steps = 0;
        while index > 0 {
            let parent = (index - 1) / 2;
            if compare(&self.entries[index], &self.entries[parent]) != Ordering::Less {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
            steps += 1;
        }
        steps
    }

    /// Moves `entries[index]` toward the leaves of the heap occupying
    /// `entries[..len]` while a child is smaller. Returns the number of swaps.
    fn sift_down(&mut self, mut index: usize, len: usize) -> u64 {
        let mut steps = 0;
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len
                && compare(&self.entries[right], &self.entries[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if compare(&self.entries[smaller], &self.entries[index]) != Ordering::Less {
                break;
            }
            self.entries.swap(index, smaller);
            index = smaller;
            steps += 1;
        }
        steps
    }
}

#[cfg(feature = "metrics")]
impl<K, S> TopNSelector<K, S> {
    pub fn metrics_snapshot(&self) -> TopNMetricsSnapshot {
        TopNMetricsSnapshot {
            offer_calls: self.metrics.offer_calls,
            offer_grows: self.metrics.offer_grows,
            offer_replaces: self.metrics.offer_replaces,
            offer_rejects: self.metrics.offer_rejects,
            sift_up_steps: self.metrics.sift_up_steps,
            sift_down_steps: self.metrics.sift_down_steps,
            drain_calls: self.metrics.drain_calls,
            drained_entries: self.metrics.drained_entries,
            clear_calls: self.metrics.clear_calls,
            peek_min_calls: self.metrics.peek_min_calls.get(),
            peek_min_found: self.metrics.peek_min_found.get(),
            len: self.entries.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, S> MetricsSnapshotProvider<TopNMetricsSnapshot> for TopNSelector<K, S> {
    fn snapshot(&self) -> TopNMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, S> MetricsReset for TopNSelector<K, S> {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<K, S> Extend<(K, S)> for TopNSelector<K, S>
where
    K: Ord,
    S: PartialOrd,
{
    fn extend<I: IntoIterator<Item = (K, S)>>(&mut self, iter: I) {
        for (key, score) in iter {
            self.offer(key, score);
        }
    }
}

impl<K, S> Extend<Entry<K, S>> for TopNSelector<K, S>
where
    K: Ord,
    S: PartialOrd,
{
    fn extend<I: IntoIterator<Item = Entry<K, S>>>(&mut self, iter: I) {
        for entry in iter {
            self.offer_entry(entry);
        }
    }
}

impl<'a, K, S> IntoIterator for &'a TopNSelector<K, S> {
    type Item = &'a Entry<K, S>;
    type IntoIter = std::slice::Iter<'a, Entry<K, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Selects the `n` greatest pairs of `iter`, descending.
///
/// # Errors
///
/// Returns [`ConfigError`] if `n` is zero or too large to reserve.
///
/// # Example
///
/// ```
/// use topnkit::ds::top_n;
///
/// let scores = vec![(1u32, 0.3), (2, 0.9), (3, 0.5)];
/// let best = top_n(scores, 2).unwrap();
/// assert_eq!(best.iter().map(|e| *e.key()).collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub fn top_n<K, S, I>(iter: I, n: usize) -> Result<Vec<Entry<K, S>>, ConfigError>
where
    K: Ord,
    S: PartialOrd,
    I: IntoIterator<Item = (K, S)>,
{
    let mut selector = TopNSelector::new(n)?;
    selector.extend(iter);
    Ok(selector.into_sorted_vec())
}
