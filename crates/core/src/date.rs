// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Date inputs and their wire form.
//!
//! Callers may hand over a date, a millisecond epoch, or a string. The host
//! only ever sees decimal millisecond strings, since its numeric bridge
//! truncates large epoch values.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Wire text for a date that could not be resolved.
pub const INVALID_DATE: &str = "NaN";

/// A caller-supplied point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch
    Epoch(i64),
    /// Epoch written as a JSON float; the fraction of a millisecond is dropped
    FractionalEpoch(f64),
    At(DateTime<Utc>),
    Text(String),
}

impl DateInput {
    /// Resolve to an instant, reading zone-less text in `tz`.
    ///
    /// Returns `None` for an invalid date; the caller decides how to carry it.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        match self {
            Self::Epoch(ms) => DateTime::from_timestamp_millis(*ms),
            Self::FractionalEpoch(ms) => {
                fractional_millis(*ms).and_then(DateTime::from_timestamp_millis)
            }
            Self::At(at) => Some(*at),
            Self::Text(text) => parse_text(text, tz),
        }
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::Epoch(ms)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

fn fractional_millis(ms: f64) -> Option<i64> {
    let ms = ms.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    (ms.is_finite() && ms >= i64::MIN as f64 && ms < i64::MAX as f64).then_some(ms as i64)
}

fn parse_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let text = text.trim();
    // Deliberately lenient: digit strings are epoch millis, not invalid dates
    if let Ok(ms) = text.parse::<i64>() {
        return DateTime::from_timestamp_millis(ms);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    // Date-only forms are UTC midnight, date-time forms without an offset are local
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
}

/// Render a resolved date for the host.
pub fn to_wire(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.timestamp_millis().to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Render a millisecond value for the host.
pub fn millis_to_wire(ms: Option<i64>) -> String {
    match ms {
        Some(ms) => ms.to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Parse a host date string back into an instant.
pub fn from_wire(text: &str) -> Option<DateTime<Utc>> {
    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Calendar breakdown of `sendAt` as the host schedules it.
///
/// Months are 1-based and weekdays count from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarFields {
    pub fn in_zone<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> Self {
        let local = at.with_timezone(tz);
        Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            weekday: local.weekday().num_days_from_sunday(),
            hour: local.hour(),
            minute: local.minute(),
        }
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
