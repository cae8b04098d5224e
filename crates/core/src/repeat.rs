// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repeat intervals for scheduled notifications.
//!
//! The host only understands an end time, so a repeat count is folded into
//! `endAt`: enough room for every occurrence plus half an interval.

use crate::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire `repeatType` for a fixed millisecond period.
pub const TIME_REPEAT_TYPE: &str = "time";

/// Named calendar-relative interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Interval {
    Minute,
    Hour,
    HalfDay,
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    pub const ALL: [Interval; 7] = [
        Interval::Minute,
        Interval::Hour,
        Interval::HalfDay,
        Interval::Day,
        Interval::Week,
        Interval::Month,
        Interval::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Minute => "minute",
            Interval::Hour => "hour",
            Interval::HalfDay => "halfDay",
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }

    /// Nominal length in milliseconds. Months are 30 days, years 365.
    pub fn period_ms(self) -> i64 {
        match self {
            Interval::Minute => 60_000,
            Interval::Hour => 3_600_000,
            Interval::HalfDay => 43_200_000,
            Interval::Day => 86_400_000,
            Interval::Week => 604_800_000,
            Interval::Month => 2_592_000_000,
            Interval::Year => 31_536_000_000,
        }
    }

    /// Slack added past the last occurrence when deriving `endAt`.
    pub fn buffer_ms(self) -> i64 {
        match self {
            Interval::Minute => 30_000,
            Interval::Hour => 1_800_000,
            Interval::HalfDay => 21_600_000,
            Interval::Day => 43_200_000,
            Interval::Week => 259_200_000,
            Interval::Month => 1_296_000_000,
            // 100 days, not half a year
            Interval::Year => 8_640_000_000,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| ParseError::UnknownInterval(s.to_string()))
    }
}

/// How a scheduled notification recurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatSpec {
    /// Fixed period in milliseconds
    Fixed(u64),
    Named(Interval),
    /// Keyword the codec does not know; passed through as `repeatType`
    Other(String),
}

impl RepeatSpec {
    /// Classify a keyword given at the API boundary.
    pub fn keyword(s: &str) -> Self {
        match s.parse::<Interval>() {
            Ok(interval) => RepeatSpec::Named(interval),
            Err(_) => RepeatSpec::Other(s.to_string()),
        }
    }

    /// The host's `repeatType` for this spec.
    pub fn repeat_type(&self) -> &str {
        match self {
            RepeatSpec::Fixed(_) => TIME_REPEAT_TYPE,
            RepeatSpec::Named(interval) => interval.as_str(),
            RepeatSpec::Other(keyword) => keyword,
        }
    }

    /// The host's `repeatTime`, only set for fixed periods.
    pub fn repeat_time(&self) -> Option<u64> {
        match self {
            RepeatSpec::Fixed(ms) => Some(*ms),
            _ => None,
        }
    }

    /// End time covering `count` repeats after `send_at_ms`, plus half an interval.
    ///
    /// Unknown keywords have no length, so they yield `None`.
    pub fn end_at(&self, send_at_ms: i64, count: u32) -> Option<i64> {
        let count = i64::from(count);
        match self {
            RepeatSpec::Fixed(ms) => {
                let period = i64::try_from(*ms).ok()?;
                // round(send_at + period * count + period / 2), halves round up
                let half = period / 2 + period % 2;
                Some(
                    send_at_ms
                        .saturating_add(period.saturating_mul(count))
                        .saturating_add(half),
                )
            }
            RepeatSpec::Named(interval) => Some(
                send_at_ms
                    .saturating_add(interval.period_ms().saturating_mul(count))
                    .saturating_add(interval.buffer_ms()),
            ),
            RepeatSpec::Other(_) => None,
        }
    }

    /// Host wire form: the keyword, or the period as a decimal string.
    pub fn to_wire(&self) -> String {
        match self {
            RepeatSpec::Fixed(ms) => ms.to_string(),
            RepeatSpec::Named(interval) => interval.as_str().to_string(),
            RepeatSpec::Other(keyword) => keyword.clone(),
        }
    }

    /// Parse the host wire form.
    ///
    /// Text counts as a period only when it is exactly the decimal rendering
    /// of an integer, so `"0500"` or `"5e3"` stay keywords. Negative periods
    /// are kept as keywords too.
    pub fn from_wire(text: &str) -> Self {
        if let Ok(ms) = text.parse::<i64>() {
            if ms.to_string() == text {
                return match u64::try_from(ms) {
                    Ok(ms) => RepeatSpec::Fixed(ms),
                    Err(_) => {
                        tracing::warn!(period = ms, "negative repeat period from host");
                        RepeatSpec::Other(text.to_string())
                    }
                };
            }
        }
        let spec = RepeatSpec::keyword(text);
        if let RepeatSpec::Other(keyword) = &spec {
            tracing::warn!(%keyword, "unrecognized repeat interval from host");
        }
        spec
    }

    /// A period written as a JSON float, rounded half up to whole milliseconds.
    fn fractional(ms: f64) -> Self {
        let rounded = (ms + 0.5).floor();
        // u64::MAX as f64 rounds up to 2^64, which is already out of range
        if rounded.is_finite() && rounded >= 0.0 && rounded < u64::MAX as f64 {
            RepeatSpec::Fixed(rounded as u64)
        } else {
            tracing::warn!(period = ms, "unusable repeat period");
            RepeatSpec::Other(ms.to_string())
        }
    }
}

impl From<Interval> for RepeatSpec {
    fn from(interval: Interval) -> Self {
        RepeatSpec::Named(interval)
    }
}

impl Serialize for RepeatSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RepeatSpec::Fixed(ms) => serializer.serialize_u64(*ms),
            RepeatSpec::Named(interval) => serializer.serialize_str(interval.as_str()),
            RepeatSpec::Other(keyword) => serializer.serialize_str(keyword),
        }
    }
}

impl<'de> Deserialize<'de> for RepeatSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Period(u64),
            Fractional(f64),
            Keyword(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Period(ms) => RepeatSpec::Fixed(ms),
            Raw::Fractional(ms) => RepeatSpec::fractional(ms),
            Raw::Keyword(keyword) => RepeatSpec::keyword(&keyword),
        })
    }
}

#[cfg(test)]
#[path = "repeat_tests.rs"]
mod tests;
