use atoi::FromRadix10SignedChecked;
use std::fmt::{self, Display, Formatter};

/// A scalar as it is actually stored in (and read back from) the database:
/// either a signed 64-bit integer or a text string.
///
/// Which variant a timestamp produces is decided by the connection's
/// [`SqliteTimeFormat`][crate::SqliteTimeFormat]: the integer formats write
/// `Integer`, the text format writes `Text`. On the read path the same value
/// is handed back to [`decode`][crate::SqliteTimeFormat::decode], or scanned
/// directly by callers that want to introspect the raw representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqliteTimeValue {
    Integer(i64),
    Text(String),
}

impl SqliteTimeValue {
    /// Returns the value as an integer, applying SQLite's text-to-integer
    /// coercion: text holding a whole-string integer literal coerces, anything
    /// else does not.
    pub fn int64(&self) -> Option<i64> {
        match self {
            SqliteTimeValue::Integer(i) => Some(*i),
            SqliteTimeValue::Text(s) => {
                let bytes = s.as_bytes();
                let (value, used) = i64::from_radix_10_signed_checked(bytes);

                // The whole string must be an integer literal: nothing left
                // over after the digit run, and a bare sign does not count.
                if used == bytes.len() && bytes.last().is_some_and(|b| b.is_ascii_digit()) {
                    value
                } else {
                    None
                }
            }
        }
    }

    /// Returns the value as text, without coercion.
    pub fn text(&self) -> Option<&str> {
        match self {
            SqliteTimeValue::Integer(_) => None,
            SqliteTimeValue::Text(s) => Some(s),
        }
    }

    /// The SQLite storage class of this value, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqliteTimeValue::Integer(_) => "INTEGER",
            SqliteTimeValue::Text(_) => "TEXT",
        }
    }
}

impl From<i64> for SqliteTimeValue {
    fn from(value: i64) -> Self {
        SqliteTimeValue::Integer(value)
    }
}

impl From<String> for SqliteTimeValue {
    fn from(value: String) -> Self {
        SqliteTimeValue::Text(value)
    }
}

impl From<&str> for SqliteTimeValue {
    fn from(value: &str) -> Self {
        SqliteTimeValue::Text(value.to_owned())
    }
}

impl Display for SqliteTimeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SqliteTimeValue::Integer(i) => Display::fmt(i, f),
            SqliteTimeValue::Text(s) => f.write_str(s),
        }
    }
}
