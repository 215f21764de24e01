use crate::error::{Error, Result};
use crate::options::SqliteTimeFormat;
use crate::value::SqliteTimeValue;
use chrono::prelude::*;

/// The canonical text layout (chrono `strftime` syntax): date, time,
/// fractional seconds to nanosecond precision and a numeric zone offset,
/// e.g. `2023-01-19 13:45:35.045028023+00:00`.
///
/// This is the one and only layout ever *written* under
/// [`SqliteTimeFormat::Text`]; the other layouts in this module exist solely
/// so that text written by older drivers or other tools still reads back.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// A text layout accepted on decode, together with the parse strategy its
/// shape requires: layouts without a zone offset are assumed to be UTC and
/// a bare date is midnight UTC.
#[derive(Debug, Clone, Copy)]
enum TimestampLayout {
    Zoned(&'static str),
    Unzoned(&'static str),
    DateOnly(&'static str),
}

// Tried in order on decode; first match wins. Ordering mirrors the layouts'
// likelihood: the canonical layout first, then progressively sparser ones.
const TIMESTAMP_FORMATS: &[TimestampLayout] = &[
    TimestampLayout::Zoned(TIMESTAMP_FORMAT),
    TimestampLayout::Unzoned("%Y-%m-%d %H:%M:%S%.f"),
    TimestampLayout::Zoned("%Y-%m-%d %H:%M:%S%:z"),
    TimestampLayout::Unzoned("%Y-%m-%d %H:%M:%S"),
    TimestampLayout::DateOnly("%Y-%m-%d"),
];

impl TimestampLayout {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        match self {
            TimestampLayout::Zoned(format) => DateTime::parse_from_str(text, format)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),

            TimestampLayout::Unzoned(format) => NaiveDateTime::parse_from_str(text, format)
                .ok()
                .map(|dt| dt.and_utc()),

            TimestampLayout::DateOnly(format) => NaiveDate::parse_from_str(text, format)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        }
    }
}

impl SqliteTimeFormat {
    /// Encodes a timestamp into the scalar actually written to the database
    /// under this format.
    ///
    /// The timestamp is normalized to UTC first. The integer formats truncate
    /// toward negative infinity to their resolution (seconds for
    /// [`Unix`][Self::Unix], milliseconds for [`UnixMs`][Self::UnixMs]);
    /// [`Text`][Self::Text] preserves full nanosecond precision in the
    /// [`TIMESTAMP_FORMAT`] layout. Every representable instant encodes.
    pub fn encode<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> SqliteTimeValue {
        match self {
            SqliteTimeFormat::Unix => SqliteTimeValue::Integer(ts.timestamp()),
            SqliteTimeFormat::UnixMs => SqliteTimeValue::Integer(ts.timestamp_millis()),
            SqliteTimeFormat::Text => SqliteTimeValue::Text(
                ts.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string(),
            ),
        }
    }

    /// Decodes a scalar read from the database back into a timestamp.
    ///
    /// The integer formats accept an integer or integral text (SQLite's
    /// text-to-integer coercion) and fail with [`Error::TypeMismatch`]
    /// otherwise. [`Text`][Self::Text] accepts a string in any of the
    /// supported layouts, tried in order; text matching none of them fails
    /// with [`Error::UnparseableTimestamp`].
    ///
    /// Reading a column whose stored representation does not match this
    /// format is not handled here: scan such columns directly into an `i64`
    /// or `String` instead.
    pub fn decode(&self, value: &SqliteTimeValue) -> Result<DateTime<Utc>> {
        match self {
            SqliteTimeFormat::Unix => {
                let seconds = expect_int64(value)?;
                DateTime::from_timestamp(seconds, 0)
                    .ok_or(Error::TimestampOutOfRange(seconds))
            }

            SqliteTimeFormat::UnixMs => {
                let millis = expect_int64(value)?;
                DateTime::from_timestamp_millis(millis)
                    .ok_or(Error::TimestampOutOfRange(millis))
            }

            SqliteTimeFormat::Text => {
                let text = value.text().ok_or_else(|| Error::TypeMismatch {
                    expected: "TEXT",
                    found: value.type_name(),
                })?;

                decode_timestamp_from_text(text)
            }
        }
    }
}

fn expect_int64(value: &SqliteTimeValue) -> Result<i64> {
    value.int64().ok_or_else(|| Error::TypeMismatch {
        expected: "INTEGER",
        found: value.type_name(),
    })
}

fn decode_timestamp_from_text(text: &str) -> Result<DateTime<Utc>> {
    for layout in TIMESTAMP_FORMATS {
        if let Some(dt) = layout.parse(text) {
            return Ok(dt);
        }
    }

    Err(Error::UnparseableTimestamp(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(text: &str) -> DateTime<Utc> {
        decode_timestamp_from_text(text).unwrap()
    }

    #[test]
    fn accepts_layouts_in_order() {
        let full = utc("2023-01-19 13:45:35.045028023+00:00");
        assert_eq!(full.timestamp_subsec_nanos(), 45_028_023);

        // no offset: assumed UTC
        assert_eq!(utc("2023-01-19 13:45:35.045028023"), full);

        // no fraction
        let whole = utc("2023-01-19 13:45:35+00:00");
        assert_eq!(whole.timestamp_subsec_nanos(), 0);
        assert_eq!(utc("2023-01-19 13:45:35"), whole);

        // date only: midnight UTC
        let midnight = utc("2023-01-19");
        assert_eq!(midnight.time(), NaiveTime::MIN);
    }

    #[test]
    fn applies_zone_offsets() {
        assert_eq!(
            utc("2023-01-19 14:45:35.045028023+01:00"),
            utc("2023-01-19 13:45:35.045028023+00:00"),
        );
    }

    #[test]
    fn rejects_unparseable_text() {
        let err = decode_timestamp_from_text("not a timestamp").unwrap_err();
        assert!(matches!(err, Error::UnparseableTimestamp(_)), "{err:?}");

        // a bare time has no layout
        decode_timestamp_from_text("13:45:35").unwrap_err();
    }
}
