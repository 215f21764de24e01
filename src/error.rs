use std::result::Result as StdResult;

/// A specialized `Result` type for this crate.
pub type Result<T> = StdResult<T, Error>;

/// Represents all the ways encoding, decoding or configuring the timestamp
/// codec can fail.
///
/// Every error is returned to the immediate caller (the parameter-binding or
/// row-scanning layer); nothing here is retried and a failed decode never
/// substitutes a placeholder timestamp.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error occurred while parsing a connection string.
    #[error("error occurred while parsing a connection string: {0}")]
    Configuration(String),

    /// A `unix`/`unix_ms` decode received a value that is not an integer, or
    /// a text-format decode received an integer.
    #[error("mismatched types; expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A text value matched none of the accepted timestamp layouts.
    #[error("text {0:?} does not match any supported timestamp format")]
    UnparseableTimestamp(String),

    /// A decoded integer falls outside the representable datetime range.
    #[error("timestamp value {0} is out of range")]
    TimestampOutOfRange(i64),
}

impl Error {
    #[inline]
    pub(crate) fn config(message: impl std::fmt::Display) -> Self {
        Error::Configuration(message.to_string())
    }
}
