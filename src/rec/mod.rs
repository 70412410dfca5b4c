//! Recommendation pipeline built on [`TopNSelector`](crate::ds::TopNSelector).
//!
//! - [`PreferenceData`]: user/item interactions
//! - [`PopularityRecommender`]: non-personalized "most popular" ranking
//! - [`TsvFormat`]: line-oriented output
//! - [`CandidatesRunner`]: batch driver over a user set

pub mod format;
pub mod popularity;
pub mod preference;
pub mod runner;

pub use format::{RecommendationFormat, TsvFormat};
pub use popularity::PopularityRecommender;
pub use preference::PreferenceData;
pub use runner::{CandidatesRunner, RunSummary, RunnerBuilder};

use crate::ds::Entry;

/// A ranked item list for one user, best item first.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<U, I> {
    pub user: U,
    pub items: Vec<(I, f64)>,
}

impl<U, I> Recommendation<U, I> {
    pub fn new(user: U, items: Vec<(I, f64)>) -> Self {
        Self { user, items }
    }

    /// Builds a recommendation from descending selector output.
    pub fn from_entries(user: U, entries: Vec<Entry<I, f64>>) -> Self {
        Self {
            user,
            items: entries.into_iter().map(Entry::into_parts).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
