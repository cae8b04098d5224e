// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire record exchanged with the host notification service.

use crate::id::NotificationId;
use crate::presentation::Presentation;
use crate::request::ScheduleInfo;
use serde::{Deserialize, Serialize};

/// Fully resolved notification in the host's representation.
///
/// Dates are decimal millisecond strings, `repeatEvery` is a string,
/// `progress` is the fraction scaled by 1000, and `payload` is JSON text.
/// `sound`, `vibrate`, `lights` and `tickerText` serialize as `null` when
/// switched off; a missing key reads the same as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNotificationRecord {
    #[serde(default)]
    pub id: NotificationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_every: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
    #[serde(default)]
    pub vibrate: Option<String>,
    #[serde(default)]
    pub lights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_clear: Option<bool>,
    #[serde(default)]
    pub ticker_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,

    #[serde(flatten)]
    pub presentation: Presentation,
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
}
