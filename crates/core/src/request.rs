// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-facing notification attributes.

use crate::date::DateInput;
use crate::id::NotificationId;
use crate::presentation::Presentation;
use crate::repeat::RepeatSpec;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A notification as the application describes it.
///
/// Only `message` is required. Everything else is filled in by the encoder.
/// `sound`, `vibrate`, `lights` and `ticker_text` are tri-state: absent
/// takes the default, `Some(None)` (JSON `null`) switches the feature off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NotificationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    // -- scheduling --
    /// Milliseconds to wait before showing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at: Option<DateInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_every: Option<RepeatSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<DateInput>,

    // -- channel --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_description: Option<String>,

    // -- defaulted presentation --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub sound: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub vibrate: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub lights: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_clear: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub ticker_text: Option<Option<String>>,
    /// Fraction in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,

    #[serde(flatten)]
    pub presentation: Presentation,

    /// Host-derived scheduling state. Filled by decoding, ignored by encoding.
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn id(mut self, id: NotificationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn send_at(mut self, at: impl Into<DateInput>) -> Self {
        self.send_at = Some(at.into());
        self
    }

    pub fn repeat(mut self, every: impl Into<RepeatSpec>, count: Option<u32>) -> Self {
        self.repeat_every = Some(every.into());
        self.repeat_count = count;
        self
    }

    pub fn delay(mut self, ms: u64) -> Self {
        self.delay = Some(ms);
        self
    }

    pub fn progress(mut self, fraction: f64) -> Self {
        self.progress = Some(fraction);
        self
    }
}

/// Scheduling fields the encoder derives for the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at_week_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at_hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at_minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_time: Option<u64>,
}

/// Keep an explicit `null` distinct from a missing field.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
