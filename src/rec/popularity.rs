//! Non-personalized popularity ranking.
//!
//! An item's score is the number of distinct users who interacted with it.
//! The global ranking is computed once, by streaming every item through a
//! [`TopNSelector`] sized to the catalogue, so ties resolve the same way as
//! everywhere else in the crate: equal counts rank the greater item first.
//! Ties are never left in first-seen order, so the ranking is the same for
//! any ordering of the input interactions.
//!
//! Per-user requests either filter the precomputed ranking
//! ([`recommend`](Recommender::recommend)) or rank an explicit candidate list
//! through a selector bounded by the requested length
//! ([`recommend_candidates`](Recommender::recommend_candidates)).
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::ds::{TopNSelector, top_n};
use crate::rec::{PreferenceData, Recommendation};
use crate::traits::Recommender;

/// Ranks items by how many distinct users interacted with them.
///
/// The same list is returned to every user, minus filtered items. Items
/// without interactions are never recommended.
///
/// # Example
///
/// ```
/// use topnkit::rec::{PopularityRecommender, PreferenceData};
/// use topnkit::traits::Recommender;
///
/// let data = PreferenceData::from_pairs([
///     ("ann", "tea"), ("bob", "tea"), ("cy", "tea"),
///     ("ann", "jam"), ("bob", "jam"),
///     ("cy", "ham"),
/// ]);
/// let rec = PopularityRecommender::new(&data);
///
/// let top2 = rec.recommend(&"dee", 2, &|_| true);
/// assert_eq!(top2.items, vec![("tea", 3.0), ("jam", 2.0)]);
///
/// let unseen = rec.recommend_candidates(&"cy", &["jam", "bread"], 0);
/// assert_eq!(unseen.items, vec![("jam", 2.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct PopularityRecommender<I> {
    ranking: Vec<(I, f64)>,
    scores: FxHashMap<I, f64>,
}

impl<I> PopularityRecommender<I>
where
    I: Ord + Hash + Clone,
{
    /// Scores every item in `data` and precomputes the global ranking.
    pub fn new<U>(data: &PreferenceData<U, I>) -> Self
    where
        U: Eq + Hash + Clone,
    {
        let counts = data
            .item_user_counts()
            .map(|(item, users)| (item.clone(), users as f64));
        // Zero items is the only way `top_n` can fail; that is an empty ranking.
        let ranking: Vec<(I, f64)> = top_n(counts, data.num_items())
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();
        let scores = ranking.iter().cloned().collect();

        tracing::debug!(items = ranking.len(), "popularity ranking computed");
        Self { ranking, scores }
    }

    /// Popularity of `item`, or `None` if nobody interacted with it.
    pub fn score_of(&self, item: &I) -> Option<f64> {
        self.scores.get(item).copied()
    }

    /// Full ranking, most popular first.
    pub fn ranking(&self) -> &[(I, f64)] {
        &self.ranking
    }
}

impl<U, I> Recommender<U, I> for PopularityRecommender<I>
where
    U: Clone,
    I: Ord + Hash + Clone,
{
    fn recommend(
        &self,
        user: &U,
        max_length: usize,
        filter: &dyn Fn(&I) -> bool,
    ) -> Recommendation<U, I> {
        let limit = if max_length == 0 {
            usize::MAX
        } else {
            max_length
        };
        let items = self
            .ranking
            .iter()
            .filter(|(item, _)| filter(item))
            .take(limit)
            .cloned()
            .collect();
        Recommendation::new(user.clone(), items)
    }

    fn recommend_candidates(
        &self,
        user: &U,
        candidates: &[I],
        max_length: usize,
    ) -> Recommendation<U, I> {
        let capacity = if max_length == 0 {
            candidates.len()
        } else {
            max_length.min(candidates.len())
        };
        let Ok(mut selector) = TopNSelector::new(capacity) else {
            return Recommendation::new(user.clone(), Vec::new());
        };

        let mut offered: FxHashSet<&I> = FxHashSet::default();
        for item in candidates {
            if let Some(&score) = self.scores.get(item)
                && offered.insert(item)
            {
                selector.offer(item.clone(), score);
            }
        }
        Recommendation::from_entries(user.clone(), selector.drain_sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PreferenceData<u32, char> {
        PreferenceData::from_pairs([
            (1, 'a'),
            (2, 'a'),
            (3, 'a'),
            (1, 'b'),
            (2, 'b'),
            (1, 'c'),
            (2, 'd'),
            (3, 'd'),
        ])
    }

    #[test]
    fn ranking_orders_by_count_then_item_desc() {
        let rec = PopularityRecommender::new(&sample());
        assert_eq!(
            rec.ranking(),
            &[('a', 3.0), ('d', 2.0), ('b', 2.0), ('c', 1.0)]
        );
        assert_eq!(rec.score_of(&'b'), Some(2.0));
        assert_eq!(rec.score_of(&'z'), None);
    }

    #[test]
    fn ties_ignore_interaction_order() {
        let pairs = [(1, 'b'), (2, 'b'), (1, 'd'), (2, 'd'), (3, 'a')];
        let forward = PopularityRecommender::new(&PreferenceData::from_pairs(pairs));
        let reversed =
            PopularityRecommender::new(&PreferenceData::from_pairs(pairs.into_iter().rev()));

        assert_eq!(forward.ranking(), &[('d', 2.0), ('b', 2.0), ('a', 1.0)]);
        assert_eq!(forward.ranking(), reversed.ranking());
    }

    #[test]
    fn zero_length_means_unbounded() {
        let rec = PopularityRecommender::new(&sample());
        let list = rec.recommend(&9, 0, &|_| true);
        assert_eq!(list.len(), 4);
        assert_eq!(list.user, 9);
    }

    #[test]
    fn filter_applies_before_truncation() {
        let rec = PopularityRecommender::new(&sample());
        let list = rec.recommend(&1, 2, &|item| *item != 'a');
        assert_eq!(list.items, vec![('d', 2.0), ('b', 2.0)]);
    }

    #[test]
    fn candidates_restrict_and_rank() {
        let rec = PopularityRecommender::new(&sample());
        let list = rec.recommend_candidates(&1, &['c', 'x', 'd', 'c'], 0);
        assert_eq!(list.items, vec![('d', 2.0), ('c', 1.0)]);

        let capped = rec.recommend_candidates(&1, &['a', 'b', 'c', 'd'], 2);
        assert_eq!(capped.items, vec![('a', 3.0), ('d', 2.0)]);
    }

    #[test]
    fn empty_candidates_and_empty_data() {
        let rec = PopularityRecommender::new(&sample());
        assert!(rec.recommend_candidates(&1, &[], 5).is_empty());

        let empty = PopularityRecommender::new(&PreferenceData::<u32, char>::new());
        assert!(empty.ranking().is_empty());
        assert!(Recommender::<u32, char>::recommend(&empty, &1, 0, &|_| true).is_empty());
    }

    #[test]
    fn default_candidate_path_agrees_with_override() {
        struct Filtered<'a>(&'a PopularityRecommender<char>);

        impl Recommender<u32, char> for Filtered<'_> {
            fn recommend(
                &self,
                user: &u32,
                max_length: usize,
                filter: &dyn Fn(&char) -> bool,
            ) -> Recommendation<u32, char> {
                self.0.recommend(user, max_length, filter)
            }
        }

        let rec = PopularityRecommender::new(&sample());
        let candidates = ['b', 'c', 'd'];
        assert_eq!(
            Filtered(&rec).recommend_candidates(&1, &candidates, 2),
            rec.recommend_candidates(&1, &candidates, 2)
        );
    }
}
