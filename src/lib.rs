//! Timestamp storage-format selection and codec for **SQLite** connections.
//!
//! SQLite has no dedicated datetime storage class, so a driver must pick a
//! scalar representation for timestamp parameters and columns. This crate is
//! that choice made explicit: a connection-scoped [`SqliteTimeFormat`]
//! resolved once from the `_time_format` connection-string option, and a pure
//! codec that converts a [`chrono::DateTime<Utc>`] to and from the scalar
//! actually stored under that format.
//!
//! Three representations are supported:
//!
//! * `_time_format=` (empty, the default): TEXT in the canonical layout
//!   [`TIMESTAMP_FORMAT`], full nanosecond precision;
//! * `_time_format=unix`: INTEGER seconds since the Unix epoch;
//! * `_time_format=unix_ms`: INTEGER milliseconds since the Unix epoch.
//!
//! Any other value fails [`SqliteConnectOptions`] parsing, so a connection
//! can never be opened with an unresolved format.
//!
//! The surrounding driver calls [`SqliteTimeFormat::encode`] just before
//! binding a timestamp parameter and [`SqliteTimeFormat::decode`] just after
//! reading a column into a timestamp target. Both are pure and touch no
//! shared state, so they may be called concurrently against the same format
//! value without synchronization.
//!
//! Callers that want to introspect what was actually stored can skip the
//! codec and scan into an `i64` or `String`; [`SqliteTimeValue`] exposes the
//! raw scalar for exactly that purpose.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use sqlite_timestamp::{SqliteTimeFormat, SqliteTimeValue};
//!
//! # fn main() -> Result<(), sqlite_timestamp::Error> {
//! let format = SqliteTimeFormat::Unix;
//! let ts = Utc.with_ymd_and_hms(2023, 1, 19, 13, 45, 35).unwrap();
//!
//! let stored = format.encode(&ts);
//! assert_eq!(stored, SqliteTimeValue::Integer(1674135935));
//!
//! assert_eq!(format.decode(&stored)?, ts);
//! # Ok(())
//! # }
//! ```

pub use error::{Error, Result};
pub use options::{SqliteConnectOptions, SqliteTimeFormat};
pub use types::TIMESTAMP_FORMAT;
pub use value::SqliteTimeValue;

mod error;
mod options;
pub mod types;
mod value;
