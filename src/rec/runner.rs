//! Batch driver: one recommendation list per user, streamed to a writer.
//!
//! ```text
//!   users ──► candidates(user) ──► recommender.recommend_candidates ──► format ──► out
//! ```
//!
//! Users are processed in the order given, duplicates dropped. The runner
//! holds no per-run state, so one runner can drive several recommenders.
use std::hash::Hash;
use std::io::{self, Write};

use rustc_hash::FxHashSet;

use crate::rec::{Recommendation, RecommendationFormat};
use crate::traits::Recommender;

/// Counts reported by a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Users for which a list was produced.
    pub users: usize,
    /// Total `(user, item)` rows written.
    pub rows: usize,
    /// Users whose list came back empty.
    pub empty_lists: usize,
}

/// Configures a [`CandidatesRunner`].
///
/// # Example
///
/// ```
/// use topnkit::rec::{PopularityRecommender, PreferenceData, RunnerBuilder, TsvFormat};
///
/// let data = PreferenceData::from_pairs([(1, 10), (2, 10), (2, 11)]);
/// let rec = PopularityRecommender::new(&data);
///
/// let runner = RunnerBuilder::new()
///     .max_length(1)
///     .build(vec![1, 2], TsvFormat::new(), |_: &u32| vec![10, 11]);
///
/// let mut out = Vec::new();
/// let summary = runner.run(&rec, &mut out).unwrap();
/// assert_eq!(summary.rows, 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "1\t10\t2\n2\t10\t2\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerBuilder {
    max_length: usize,
}

impl RunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps each list at `max_length` items; `0` (the default) keeps every
    /// ranked candidate.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Builds a runner over `users`.
    pub fn build<U, I, F, C>(
        self,
        users: impl IntoIterator<Item = U>,
        format: F,
        candidates: C,
    ) -> CandidatesRunner<U, I, F, C>
    where
        U: Eq + Hash + Clone,
        F: RecommendationFormat<U, I>,
        C: Fn(&U) -> Vec<I>,
    {
        let mut seen = FxHashSet::default();
        let users = users
            .into_iter()
            .filter(|user| seen.insert(user.clone()))
            .collect();
        CandidatesRunner {
            users,
            format,
            candidates,
            max_length: self.max_length,
            _item: std::marker::PhantomData,
        }
    }
}

/// Generates one list per user from that user's candidate items.
pub struct CandidatesRunner<U, I, F, C> {
    users: Vec<U>,
    format: F,
    candidates: C,
    max_length: usize,
    _item: std::marker::PhantomData<fn() -> I>,
}

impl<U, I, F, C> CandidatesRunner<U, I, F, C>
where
    I: Eq + Hash,
    F: RecommendationFormat<U, I>,
    C: Fn(&U) -> Vec<I>,
{
    /// Users in processing order.
    pub fn users(&self) -> &[U] {
        &self.users
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Ranks each user's candidates with `recommender` and writes the lists.
    ///
    /// # Errors
    ///
    /// Stops at the first write or flush error and returns it.
    pub fn run<R, W>(&self, recommender: &R, out: W) -> io::Result<RunSummary>
    where
        R: Recommender<U, I> + ?Sized,
        W: Write,
    {
        self.run_with(
            |user| {
                let candidates = (self.candidates)(user);
                recommender.recommend_candidates(user, &candidates, self.max_length)
            },
            out,
        )
    }

    /// Writes the list `recommend` produces for each user.
    ///
    /// # Errors
    ///
    /// Stops at the first write or flush error and returns it.
    pub fn run_with<G, W>(&self, mut recommend: G, mut out: W) -> io::Result<RunSummary>
    where
        G: FnMut(&U) -> Recommendation<U, I>,
        W: Write,
    {
        let span = tracing::info_span!("candidates_run", users = self.users.len());
        let _enter = span.enter();

        let mut summary = RunSummary::default();
        for user in &self.users {
            let recommendation = recommend(user);
            tracing::debug!(items = recommendation.len(), "writing recommendation");

            if recommendation.is_empty() {
                summary.empty_lists += 1;
            }
            summary.rows += recommendation.len();
            summary.users += 1;
            self.format.write(&recommendation, &mut out)?;
        }
        out.flush()?;

        tracing::info!(
            users = summary.users,
            rows = summary.rows,
            empty_lists = summary.empty_lists,
            "recommendation run finished"
        );
        Ok(summary)
    }
}
