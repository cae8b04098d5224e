// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::FixedOffset;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn epoch_resolves_to_instant() {
    let at = DateInput::Epoch(1_710_498_600_000).resolve(&Utc).unwrap();
    assert_eq!(at, utc(2024, 3, 15, 10, 30));
}

#[test]
fn date_resolves_to_itself() {
    let at = utc(2024, 3, 15, 10, 30);
    assert_eq!(DateInput::At(at).resolve(&Utc), Some(at));
}

#[yare::parameterized(
    epoch_digits   = { "1710498600000" },
    rfc3339_utc    = { "2024-03-15T10:30:00Z" },
    rfc3339_offset = { "2024-03-15T12:30:00+02:00" },
    local_minutes  = { "2024-03-15T10:30" },
    local_seconds  = { "2024-03-15T10:30:00" },
    local_spaced   = { "2024-03-15 10:30:00" },
)]
fn text_resolves(text: &str) {
    let at = DateInput::from(text).resolve(&Utc).unwrap();
    assert_eq!(at, utc(2024, 3, 15, 10, 30));
}

#[test]
fn zone_less_text_is_read_in_encoder_zone() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let at = DateInput::from("2024-03-15T10:30").resolve(&tz).unwrap();
    assert_eq!(at, utc(2024, 3, 15, 8, 30));
}

#[test]
fn date_only_text_is_utc_midnight() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let at = DateInput::from("2024-03-15").resolve(&tz).unwrap();
    assert_eq!(at, utc(2024, 3, 15, 0, 0));
}

#[yare::parameterized(
    garbage    = { "next tuesday" },
    empty      = { "" },
    bad_month  = { "2024-13-01T00:00" },
)]
fn unparseable_text_is_invalid(text: &str) {
    assert_eq!(DateInput::from(text).resolve(&Utc), None);
}

#[test]
fn wire_form_is_decimal_millis() {
    let at = utc(2024, 3, 15, 10, 30);
    assert_eq!(to_wire(Some(at)), "1710498600000");
    assert_eq!(to_wire(None), INVALID_DATE);
    assert_eq!(from_wire("1710498600000"), Some(at));
}

#[test]
fn from_wire_rejects_non_numeric() {
    assert_eq!(from_wire(INVALID_DATE), None);
    assert_eq!(from_wire("soon"), None);
}

#[test]
fn calendar_fields_follow_zone() {
    // Friday
    let at = utc(2024, 3, 15, 23, 45);
    let fields = CalendarFields::in_zone(&at, &Utc);
    assert_eq!(
        fields,
        CalendarFields {
            year: 2024,
            month: 3,
            day: 15,
            weekday: 5,
            hour: 23,
            minute: 45,
        }
    );

    let tz = FixedOffset::east_opt(3600).unwrap();
    let shifted = CalendarFields::in_zone(&at, &tz);
    assert_eq!((shifted.day, shifted.weekday, shifted.hour), (16, 6, 0));
    assert_eq!(shifted.minute, 45);
}

#[test]
fn sunday_is_weekday_zero() {
    let fields = CalendarFields::in_zone(&utc(2024, 3, 17, 9, 0), &Utc);
    assert_eq!(fields.weekday, 0);
}

#[test]
fn date_input_deserializes_by_shape() {
    let epoch: DateInput = serde_json::from_str("1710498600000").unwrap();
    assert_eq!(epoch, DateInput::Epoch(1_710_498_600_000));

    let at: DateInput = serde_json::from_str("\"2024-03-15T10:30:00Z\"").unwrap();
    assert_eq!(at, DateInput::At(utc(2024, 3, 15, 10, 30)));

    let text: DateInput = serde_json::from_str("\"tomorrow\"").unwrap();
    assert_eq!(text, DateInput::Text("tomorrow".into()));
}

#[test]
fn float_epoch_deserializes_and_resolves() {
    let input: DateInput = serde_json::from_str("1710498600000.0").unwrap();
    assert_eq!(input, DateInput::FractionalEpoch(1_710_498_600_000.0));
    assert_eq!(input.resolve(&Utc), Some(utc(2024, 3, 15, 10, 30)));
}

#[test]
fn float_epoch_drops_sub_millisecond_fraction() {
    let at = DateInput::FractionalEpoch(1_710_498_600_000.9).resolve(&Utc).unwrap();
    assert_eq!(at.timestamp_millis(), 1_710_498_600_000);
}

#[yare::parameterized(
    nan       = { f64::NAN },
    infinite  = { f64::INFINITY },
    too_large = { 1e300 },
)]
fn unusable_float_epoch_is_invalid(ms: f64) {
    assert_eq!(DateInput::FractionalEpoch(ms).resolve(&Utc), None);
}
