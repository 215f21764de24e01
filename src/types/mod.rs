//! Conversions between in-process timestamps and **SQLite** storage classes.
//!
//! The in-process type is [`chrono::DateTime<Utc>`]; what it converts to and
//! from depends on the connection's [`SqliteTimeFormat`][crate::SqliteTimeFormat]:
//!
//! | Format               | SQLite storage class | Resolution   |
//! |----------------------|----------------------|--------------|
//! | `Text` (default)     | TEXT                 | nanosecond   |
//! | `Unix` (`unix`)      | INTEGER              | second       |
//! | `UnixMs` (`unix_ms`) | INTEGER              | millisecond  |
//!
//! ##### NOTE: `TEXT` conversions
//! Text timestamps are always *written* in the canonical layout
//! ([`TIMESTAMP_FORMAT`][crate::TIMESTAMP_FORMAT]). On *read*, a number of
//! layouts are tried so that values written without fractional seconds or a
//! zone offset (or as a bare date) by other tools still decode; a missing
//! offset is taken as UTC and a missing fraction as zero. See
//! `src/types/datetime.rs` for the current list.
//!
//! ##### NOTE: precision and round-trips
//! The integer formats truncate on encode; decoding what was encoded yields
//! the original instant truncated to the format's resolution. Only `Text`
//! round-trips full nanosecond precision.

mod datetime;

pub use datetime::TIMESTAMP_FORMAT;
