//! Scored entries and their total order.
//!
//! An [`Entry`] pairs a key with a score. Entries compare by score first and
//! by key second, so two entries are equal only when both fields are equal:
//!
//! ```text
//!   (b, 5.0) > (a, 5.0)     same score, key decides
//!   (a, 6.0) > (z, 5.0)     score decides
//! ```
//!
//! Scores only need [`PartialOrd`] so that `f32`/`f64` can be used directly.
//! Incomparable scores (NaN) are a caller error: [`compare`] treats them as
//! equal in score and falls through to the key, which keeps every caller
//! panic-free but leaves the resulting ranking unspecified.
use std::cmp::Ordering;

/// Immutable `(key, score)` pair ordered by score, then key.
///
/// # Example
///
/// ```
/// use topnkit::ds::Entry;
///
/// let a = Entry::new("a", 5.0);
/// let b = Entry::new("b", 5.0);
/// let c = Entry::new("c", 1.0);
///
/// assert!(b > a);
/// assert!(a > c);
/// assert_eq!(a.key(), &"a");
/// assert_eq!(a.score(), &5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Entry<K, S> {
    key: K,
    score: S,
}

impl<K, S> Entry<K, S> {
    /// Creates an entry.
    #[inline]
    pub fn new(key: K, score: S) -> Self {
        Self { key, score }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the score.
    #[inline]
    pub fn score(&self) -> &S {
        &self.score
    }

    /// Splits the entry into `(key, score)`.
    #[inline]
    pub fn into_parts(self) -> (K, S) {
        (self.key, self.score)
    }
}

/// Three-way comparison used by every ordering decision in the crate.
///
/// Score is the primary criterion and key the secondary one. Incomparable
/// scores compare as equal.
///
/// ```
/// use std::cmp::Ordering;
/// use topnkit::ds::{Entry, compare};
///
/// assert_eq!(compare(&Entry::new(1, 2.0), &Entry::new(9, 1.0)), Ordering::Greater);
/// assert_eq!(compare(&Entry::new(1, 2.0), &Entry::new(9, 2.0)), Ordering::Less);
/// assert_eq!(compare(&Entry::new(1, 2.0), &Entry::new(1, 2.0)), Ordering::Equal);
/// ```
#[inline]
pub fn compare<K, S>(a: &Entry<K, S>, b: &Entry<K, S>) -> Ordering
where
    K: Ord,
    S: PartialOrd,
{
    compare_parts(&a.key, &a.score, &b.key, &b.score)
}

/// [`compare`] over borrowed parts, for callers that have not built an entry.
#[inline]
pub(crate) fn compare_parts<K, S>(a_key: &K, a_score: &S, b_key: &K, b_score: &S) -> Ordering
where
    K: Ord,
    S: PartialOrd,
{
    match a_score.partial_cmp(b_score) {
        Some(Ordering::Equal) | None => a_key.cmp(b_key),
        Some(ordering) => ordering,
    }
}

impl<K, S> PartialEq for Entry<K, S>
where
    K: Ord,
    S: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl<K, S> Eq for Entry<K, S>
where
    K: Ord,
    S: PartialOrd,
{
}

impl<K, S> PartialOrd for Entry<K, S>
where
    K: Ord,
    S: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, S> Ord for Entry<K, S>
where
    K: Ord,
    S: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl<K, S> From<(K, S)> for Entry<K, S> {
    fn from((key, score): (K, S)) -> Self {
        Self::new(key, score)
    }
}

impl<K, S> From<Entry<K, S>> for (K, S) {
    fn from(entry: Entry<K, S>) -> Self {
        entry.into_parts()
    }
}
