pub use crate::ds::{Entry, TopNSelector, compare, merge_sorted, top_n};
pub use crate::error::{ConfigError, InvariantError, ParseError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{MetricsSnapshotProvider, TopNMetricsSnapshot};
pub use crate::rec::{
    CandidatesRunner, PopularityRecommender, PreferenceData, Recommendation,
    RecommendationFormat, RunSummary, RunnerBuilder, TsvFormat,
};
pub use crate::traits::Recommender;
