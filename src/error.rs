//! Error types for the topnkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (e.g. a zero-capacity selector).
//! - [`InvariantError`]: Returned by
//!   [`TopNSelector::check_invariants`](crate::ds::TopNSelector::check_invariants)
//!   when the size bound or heap property does not hold.
//! - [`ParseError`]: Returned when preference input cannot be parsed.
//!
//! ## Example Usage
//!
//! ```
//! use topnkit::ds::TopNSelector;
//! use topnkit::error::ConfigError;
//!
//! let selector: Result<TopNSelector<u32, f64>, ConfigError> = TopNSelector::new(10);
//! assert!(selector.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = TopNSelector::<u32, f64>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal selector invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by [`TopNSelector::new`](crate::ds::TopNSelector::new). No
/// partially built value is ever returned alongside it.
///
/// # Example
///
/// ```
/// use topnkit::ds::TopNSelector;
///
/// let err = TopNSelector::<u64, u64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Error returned when a line of preference input is malformed.
///
/// `line` is 1-based; `0` is used for failures not tied to a line
/// (e.g. an I/O error while reading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    message: String,
}

impl ParseError {
    /// Creates a new `ParseError` for the given 1-based line.
    #[inline]
    pub fn new(line: usize, msg: impl Into<String>) -> Self {
        Self {
            line,
            message: msg.into(),
        }
    }

    /// Returns the 1-based line number, or `0` if unknown.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            f.write_str(&self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::new(0, err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("heap property violated at index 3");
        assert_eq!(err.to_string(), "heap property violated at index 3");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- ParseError -------------------------------------------------------

    #[test]
    fn parse_display_includes_line() {
        let err = ParseError::new(7, "missing item column");
        assert_eq!(err.to_string(), "line 7: missing item column");
        assert_eq!(err.line(), 7);
        assert_eq!(err.message(), "missing item column");
    }

    #[test]
    fn parse_display_without_line() {
        let err = ParseError::new(0, "unexpected end of stream");
        assert_eq!(err.to_string(), "unexpected end of stream");
    }

    #[test]
    fn parse_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = ParseError::from(io);
        assert_eq!(err.line(), 0);
        assert!(err.message().contains("eof"));
    }
}
