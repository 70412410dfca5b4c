//! # Ranking Traits
//!
//! Seams between the ranking components and the orchestration that drives
//! them.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────┐
//!   │            Recommender<U, I>             │
//!   │                                          │
//!   │  recommend(&U, max_length, filter)       │
//!   │  recommend_candidates(&U, &[I], max_len) │
//!   └────────────────────┬─────────────────────┘
//!                        │ implemented by
//!                        ▼
//!              PopularityRecommender<I>
//!                        │ consumed by
//!                        ▼
//!   CandidatesRunner ──► RecommendationFormat<U, I> ──► io::Write
//! ```
//!
//! ## Length Convention
//!
//! `max_length == 0` means "no limit" everywhere in this crate; any other
//! value caps the number of ranked items.
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::rec::Recommendation;

/// Produces ranked item lists for users.
///
/// # Example
///
/// ```
/// use topnkit::rec::{PopularityRecommender, PreferenceData};
/// use topnkit::traits::Recommender;
///
/// let data = PreferenceData::from_pairs([(1, 'a'), (2, 'a'), (2, 'b')]);
/// let rec = PopularityRecommender::new(&data);
///
/// let list = rec.recommend(&1, 0, &|_| true);
/// assert_eq!(list.items, vec![('a', 2.0), ('b', 1.0)]);
/// ```
pub trait Recommender<U, I>
where
    I: Eq + Hash,
{
    /// Ranks items passing `filter` for `user`, capped at `max_length`
    /// (0 = unbounded).
    fn recommend(
        &self,
        user: &U,
        max_length: usize,
        filter: &dyn Fn(&I) -> bool,
    ) -> Recommendation<U, I>;

    /// Ranks only the given candidate items for `user`.
    fn recommend_candidates(
        &self,
        user: &U,
        candidates: &[I],
        max_length: usize,
    ) -> Recommendation<U, I> {
        let allowed: FxHashSet<&I> = candidates.iter().collect();
        self.recommend(user, max_length, &|item| allowed.contains(item))
    }
}
