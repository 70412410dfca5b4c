pub mod entry;
pub mod merge;
pub mod top_n;

pub use entry::{Entry, compare};
pub use merge::merge_sorted;
pub use top_n::{TopNSelector, top_n};
