use crate::error::Error;
use std::str::FromStr;

/// The on-disk representation used for timestamp values on a connection.
///
/// Selected once per connection via the `_time_format` connection-string
/// option and immutable thereafter; every timestamp written or read on that
/// connection goes through the chosen format. See the crate docs for the
/// meaning of each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqliteTimeFormat {
    /// Text in the canonical layout (see
    /// [`TIMESTAMP_FORMAT`][crate::TIMESTAMP_FORMAT]). The default.
    #[default]
    Text,
    /// Signed count of seconds since the Unix epoch.
    Unix,
    /// Signed count of milliseconds since the Unix epoch.
    UnixMs,
}

impl SqliteTimeFormat {
    /// The `_time_format` option value selecting this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SqliteTimeFormat::Text => "",
            SqliteTimeFormat::Unix => "unix",
            SqliteTimeFormat::UnixMs => "unix_ms",
        }
    }
}

impl FromStr for SqliteTimeFormat {
    type Err = Error;

    // Option values are matched verbatim: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "" => SqliteTimeFormat::Text,
            "unix" => SqliteTimeFormat::Unix,
            "unix_ms" => SqliteTimeFormat::UnixMs,

            _ => {
                return Err(Error::Configuration(format!(
                    "unknown value {s:?} for `_time_format`"
                )));
            }
        })
    }
}
