// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host record denormalization.
//!
//! Undoes the representational conversions of the encoder. Side-computed
//! fields (`repeatType`, a derived `endAt`) are returned as the host has them.

use crate::date::{self, DateInput};
use crate::encode::PROGRESS_SCALE;
use crate::payload;
use crate::record::HostNotificationRecord;
use crate::repeat::RepeatSpec;
use crate::request::NotificationRequest;

/// Rebuild caller-facing attributes from a host record.
pub fn decode(record: HostNotificationRecord) -> NotificationRequest {
    NotificationRequest {
        id: Some(record.id),
        subject: record.subject,
        message: record.message,
        action: record.action,
        payload: record
            .payload
            .filter(|text| !text.is_empty())
            .map(|text| payload::decode_payload(&text)),
        delay: record.delay,
        send_at: decode_date(record.send_at, "sendAt"),
        repeat_every: record
            .repeat_every
            .filter(|text| !text.is_empty())
            .map(|text| RepeatSpec::from_wire(&text)),
        repeat_count: record.repeat_count,
        end_at: decode_date(record.end_at, "endAt"),
        when: decode_date(record.when, "when"),
        channel_id: record.channel_id,
        channel_name: record.channel_name,
        channel_description: record.channel_description,
        priority: record.priority,
        small_icon: record.small_icon,
        // The host always carries these switches, so null means switched off
        sound: Some(record.sound),
        vibrate: Some(record.vibrate),
        lights: Some(record.lights),
        auto_clear: record.auto_clear,
        ticker_text: Some(record.ticker_text),
        progress: record
            .progress
            .map(|scaled| scaled as f64 / PROGRESS_SCALE),
        presentation: record.presentation,
        schedule: record.schedule,
    }
}

fn decode_date(text: Option<String>, field: &str) -> Option<DateInput> {
    let text = text.filter(|text| !text.is_empty())?;
    match date::from_wire(&text) {
        Some(at) => Some(DateInput::At(at)),
        None => {
            tracing::warn!(field, %text, "host date is not a millisecond timestamp");
            Some(DateInput::Text(text))
        }
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
