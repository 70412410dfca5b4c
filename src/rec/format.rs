//! Serialization of recommendation lists.
//!
//! The selector itself has no wire format; consumers choose one here.
//! [`TsvFormat`] writes one `user<TAB>item<TAB>score` line per ranked item,
//! best item first, which reads back directly as preference input.
use std::fmt::Display;
use std::io::{self, Write};

use crate::rec::Recommendation;

/// Writes recommendation lists to a byte sink.
pub trait RecommendationFormat<U, I> {
    fn write(&self, recommendation: &Recommendation<U, I>, out: &mut dyn Write) -> io::Result<()>;
}

/// Tab-separated `user<TAB>item<TAB>score` lines.
///
/// Scores are printed with `f64`'s shortest round-trip representation unless
/// a fixed precision is set.
///
/// # Example
///
/// ```
/// use topnkit::rec::{Recommendation, RecommendationFormat, TsvFormat};
///
/// let rec = Recommendation::new("ann", vec![("tea", 3.0), ("jam", 2.5)]);
/// let mut out = Vec::new();
/// TsvFormat::new().write(&rec, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "ann\ttea\t3\nann\tjam\t2.5\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvFormat {
    precision: Option<usize>,
}

impl TsvFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints scores with exactly `digits` decimal places.
    pub fn with_precision(digits: usize) -> Self {
        Self {
            precision: Some(digits),
        }
    }
}

impl<U, I> RecommendationFormat<U, I> for TsvFormat
where
    U: Display,
    I: Display,
{
    fn write(&self, recommendation: &Recommendation<U, I>, out: &mut dyn Write) -> io::Result<()> {
        let user = &recommendation.user;
        for (item, score) in &recommendation.items {
            match self.precision {
                Some(digits) => writeln!(out, "{}\t{}\t{:.*}", user, item, digits, score)?,
                None => writeln!(out, "{}\t{}\t{}", user, item, score)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_recommendation_writes_nothing() {
        let rec: Recommendation<u32, u32> = Recommendation::new(1, Vec::new());
        let mut out = Vec::new();
        TsvFormat::new().write(&rec, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn fixed_precision() {
        let rec = Recommendation::new(7, vec![(42, 1.0 / 3.0)]);
        let mut out = Vec::new();
        TsvFormat::with_precision(3).write(&rec, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7\t42\t0.333\n");
    }

    #[test]
    fn write_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let rec = Recommendation::new(1, vec![(2, 1.0)]);
        let err = TsvFormat::new().write(&rec, &mut Broken).unwrap_err();
        assert_eq!(err.to_string(), "sink closed");
    }
}
