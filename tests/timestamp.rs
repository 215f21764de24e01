use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use sqlite_timestamp::{
    Error, SqliteConnectOptions, SqliteTimeFormat, SqliteTimeValue, TIMESTAMP_FORMAT,
};

// The reference instant used throughout: sub-millisecond nanoseconds so every
// format's truncation is observable.
fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 19, 13, 45, 35)
        .unwrap()
        .with_nanosecond(45_028_023)
        .unwrap()
}

#[test]
fn resolve_time_format() {
    assert_eq!(
        "".parse::<SqliteTimeFormat>().unwrap(),
        SqliteTimeFormat::Text
    );
    assert_eq!(
        "unix".parse::<SqliteTimeFormat>().unwrap(),
        SqliteTimeFormat::Unix
    );
    assert_eq!(
        "unix_ms".parse::<SqliteTimeFormat>().unwrap(),
        SqliteTimeFormat::UnixMs
    );

    let err = "nope".parse::<SqliteTimeFormat>().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "{err:?}");
}

#[test]
fn time_format_from_connection_uri() {
    // An invalid format must fail before the connection can be used at all;
    // a valid one is fixed on the options for the connection's lifetime.
    for format in ["", "unix", "unix_ms", "nope"] {
        let uri = format!("sqlite://:memory:?_time_format={format}");
        let options = uri.parse::<SqliteConnectOptions>();

        match format {
            "" | "unix" | "unix_ms" => {
                let expected = format.parse::<SqliteTimeFormat>().unwrap();
                assert_eq!(options.unwrap().get_time_format(), expected);
            }
            _ => {
                assert!(options.is_err(), "expected error for invalid time format");
            }
        }
    }
}

#[test]
fn open_mode_flags_from_connection_uri() {
    let options: SqliteConnectOptions = "sqlite://a.db?mode=rwc".parse().unwrap();
    assert!(options.get_create_if_missing());
    assert!(!options.get_read_only());
    assert!(!options.get_in_memory());
    assert_eq!(options.get_filename(), std::path::Path::new("a.db"));

    let options: SqliteConnectOptions = "sqlite::memory:".parse().unwrap();
    assert!(options.get_in_memory());
}

#[test]
fn unix_round_trip() {
    let ts = reference_instant();
    let format = SqliteTimeFormat::Unix;

    let stored = format.encode(&ts);
    assert_eq!(stored, SqliteTimeValue::Integer(ts.timestamp()));
    assert_eq!(stored.int64(), Some(1674135935));

    // reads back truncated to the second
    let decoded = format.decode(&stored).unwrap();
    assert_eq!(decoded, ts.with_nanosecond(0).unwrap());
}

#[test]
fn unix_ms_round_trip() {
    let ts = reference_instant();
    let format = SqliteTimeFormat::UnixMs;

    let stored = format.encode(&ts);
    assert_eq!(stored, SqliteTimeValue::Integer(ts.timestamp_millis()));
    assert_eq!(stored.int64(), Some(1674135935045));

    // reads back truncated to the millisecond
    let decoded = format.decode(&stored).unwrap();
    assert_eq!(decoded, ts.with_nanosecond(45_000_000).unwrap());
}

#[test]
fn text_round_trip() {
    let ts = reference_instant();
    let format = SqliteTimeFormat::Text;

    let stored = format.encode(&ts);
    assert_eq!(stored.text(), Some("2023-01-19 13:45:35.045028023+00:00"));
    assert_eq!(
        stored.text().unwrap(),
        ts.format(TIMESTAMP_FORMAT).to_string()
    );

    // full nanosecond precision survives
    assert_eq!(format.decode(&stored).unwrap(), ts);
}

#[test]
fn encode_normalizes_to_utc() {
    let ts = reference_instant();
    let eastern = ts.with_timezone(&FixedOffset::east_opt(3600).unwrap());

    for format in [
        SqliteTimeFormat::Text,
        SqliteTimeFormat::Unix,
        SqliteTimeFormat::UnixMs,
    ] {
        assert_eq!(format.encode(&eastern), format.encode(&ts));
    }
}

#[test]
fn pre_epoch_truncates_toward_negative_infinity() {
    let ts = Utc
        .with_ymd_and_hms(1969, 12, 31, 23, 59, 59)
        .unwrap()
        .with_nanosecond(500_000_000)
        .unwrap();

    let stored = SqliteTimeFormat::Unix.encode(&ts);
    assert_eq!(stored, SqliteTimeValue::Integer(-1));

    let decoded = SqliteTimeFormat::Unix.decode(&stored).unwrap();
    assert_eq!(decoded, ts.with_nanosecond(0).unwrap());
}

#[test]
fn text_decode_falls_back_across_layouts() {
    let format = SqliteTimeFormat::Text;
    let whole = reference_instant().with_nanosecond(0).unwrap();

    // fraction but no offset: assumed UTC
    let decoded = format
        .decode(&SqliteTimeValue::from("2023-01-19 13:45:35.045028023"))
        .unwrap();
    assert_eq!(decoded, reference_instant());

    // no fraction, numeric offset
    let decoded = format
        .decode(&SqliteTimeValue::from("2023-01-19 14:45:35+01:00"))
        .unwrap();
    assert_eq!(decoded, whole);

    // neither
    let decoded = format
        .decode(&SqliteTimeValue::from("2023-01-19 13:45:35"))
        .unwrap();
    assert_eq!(decoded, whole);

    // date only: midnight UTC
    let decoded = format
        .decode(&SqliteTimeValue::from("2023-01-19"))
        .unwrap();
    assert_eq!(decoded, Utc.with_ymd_and_hms(2023, 1, 19, 0, 0, 0).unwrap());
}

#[test]
fn integer_decode_coerces_integral_text() {
    // SQLite can hand back an integral value with TEXT affinity; the codec
    // coerces it the way SQLite itself would.
    let decoded = SqliteTimeFormat::Unix
        .decode(&SqliteTimeValue::from("1674135935"))
        .unwrap();
    assert_eq!(
        decoded,
        Utc.with_ymd_and_hms(2023, 1, 19, 13, 45, 35).unwrap()
    );
}

#[test]
fn integer_decode_rejects_non_integral_input() {
    // including text that merely *starts* with a valid digit run; a prefix
    // parse here would decode garbage instead of failing
    for text in [
        "2023-01-19 13:45:35",
        "1674135935x",
        "167 4135935",
        "",
    ] {
        for format in [SqliteTimeFormat::Unix, SqliteTimeFormat::UnixMs] {
            let err = format.decode(&SqliteTimeValue::from(text)).unwrap_err();
            assert!(matches!(err, Error::TypeMismatch { .. }), "{text:?}: {err:?}");
        }
    }
}

#[test]
fn text_decode_rejects_integers_and_garbage() {
    let err = SqliteTimeFormat::Text
        .decode(&SqliteTimeValue::Integer(1674135935))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "{err:?}");

    let err = SqliteTimeFormat::Text
        .decode(&SqliteTimeValue::from("19/01/2023 13:45"))
        .unwrap_err();
    assert!(matches!(err, Error::UnparseableTimestamp(_)), "{err:?}");
}

#[test]
fn integer_decode_rejects_out_of_range() {
    for format in [SqliteTimeFormat::Unix, SqliteTimeFormat::UnixMs] {
        let err = format
            .decode(&SqliteTimeValue::Integer(i64::MAX))
            .unwrap_err();
        assert!(matches!(err, Error::TimestampOutOfRange(_)), "{err:?}");
    }
}

#[test]
fn option_value_round_trips_through_as_str() {
    for format in [
        SqliteTimeFormat::Text,
        SqliteTimeFormat::Unix,
        SqliteTimeFormat::UnixMs,
    ] {
        assert_eq!(format.as_str().parse::<SqliteTimeFormat>().unwrap(), format);
    }
}
