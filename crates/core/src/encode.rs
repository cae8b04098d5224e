// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request normalization for the host.
//!
//! Encoding is total: malformed optional input is coerced (an unparseable
//! date becomes an invalid date on the wire) and never rejected.

use crate::date::{self, CalendarFields, DateInput};
use crate::defaults::CodecDefaults;
use crate::id::{IdGen, RandomIdGen};
use crate::payload;
use crate::record::HostNotificationRecord;
use crate::request::{NotificationRequest, ScheduleInfo};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Scale applied to `progress` so the host can carry it as an integer.
pub const PROGRESS_SCALE: f64 = 1000.0;

/// Turns caller requests into host records.
///
/// Calendar fields for `sendAt` are computed in `tz`, which is the local
/// zone unless overridden.
#[derive(Clone)]
pub struct Encoder<G = RandomIdGen, Tz: TimeZone = Local> {
    defaults: CodecDefaults,
    ids: G,
    tz: Tz,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            defaults: CodecDefaults::default(),
            ids: RandomIdGen,
            tz: Local,
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGen, Tz: TimeZone> Encoder<G, Tz> {
    pub fn with_defaults(mut self, defaults: CodecDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_id_gen<G2: IdGen>(self, ids: G2) -> Encoder<G2, Tz> {
        Encoder {
            defaults: self.defaults,
            ids,
            tz: self.tz,
        }
    }

    pub fn with_time_zone<Tz2: TimeZone>(self, tz: Tz2) -> Encoder<G, Tz2> {
        Encoder {
            defaults: self.defaults,
            ids: self.ids,
            tz,
        }
    }

    /// Produce the fully defaulted host record for `request`.
    pub fn encode(&self, request: &NotificationRequest) -> HostNotificationRecord {
        let defaults = &self.defaults;
        let id = request.id.unwrap_or_else(|| self.ids.next());

        let ticker_text = match &request.ticker_text {
            Some(explicit) => explicit.clone(),
            None => Some(default_ticker_text(
                request.subject.as_deref(),
                &request.message,
            )),
        };

        let send_at = request
            .send_at
            .as_ref()
            .map(|input| self.resolve_date(input, "sendAt"));
        let mut end_at = request
            .end_at
            .as_ref()
            .map(|input| self.resolve_date(input, "endAt").map(|at| at.timestamp_millis()));
        let when = request
            .when
            .as_ref()
            .map(|input| self.resolve_date(input, "when"));

        let mut schedule = ScheduleInfo {
            delayed: Some(request.delay.is_some()),
            scheduled: Some(request.send_at.is_some()),
            ..ScheduleInfo::default()
        };

        if let Some(Some(at)) = send_at {
            let fields = CalendarFields::in_zone(&at, &self.tz);
            schedule.send_at_year = Some(fields.year);
            schedule.send_at_month = Some(fields.month);
            schedule.send_at_day = Some(fields.day);
            schedule.send_at_week_day = Some(fields.weekday);
            schedule.send_at_hour = Some(fields.hour);
            schedule.send_at_minute = Some(fields.minute);
        }

        if let (Some(send_at), Some(repeat)) = (send_at, &request.repeat_every) {
            schedule.repeat_type = Some(repeat.repeat_type().to_string());
            schedule.repeat_time = repeat.repeat_time();

            // The host only knows endAt, so a repeat count becomes one
            let count = request.repeat_count.filter(|count| *count > 0);
            if let (Some(at), Some(count)) = (send_at, count) {
                if let Some(end) = repeat.end_at(at.timestamp_millis(), count) {
                    end_at = Some(Some(end));
                }
            }
        }

        tracing::debug!(
            id,
            delayed = request.delay.is_some(),
            scheduled = request.send_at.is_some(),
            repeat_type = schedule.repeat_type.as_deref(),
            "encoded notification"
        );

        HostNotificationRecord {
            id,
            subject: request.subject.clone(),
            message: request.message.clone(),
            action: Some(
                request
                    .action
                    .clone()
                    .unwrap_or_else(|| defaults.action.clone()),
            ),
            payload: Some(payload::encode_payload(request.payload.as_ref())),
            delay: request.delay,
            send_at: send_at.map(date::to_wire),
            repeat_every: request.repeat_every.as_ref().map(|repeat| repeat.to_wire()),
            repeat_count: request.repeat_count,
            end_at: end_at.map(date::millis_to_wire),
            when: when.map(date::to_wire),
            channel_id: Some(or_default(&request.channel_id, &defaults.channel_id)),
            channel_name: Some(or_default(&request.channel_name, &defaults.channel_name)),
            channel_description: Some(or_default(
                &request.channel_description,
                &defaults.channel_description,
            )),
            priority: Some(request.priority.unwrap_or(defaults.priority)),
            small_icon: Some(or_default(&request.small_icon, &defaults.small_icon)),
            sound: tri_state(&request.sound, &defaults.sound),
            vibrate: tri_state(&request.vibrate, &defaults.vibrate),
            lights: tri_state(&request.lights, &defaults.lights),
            auto_clear: Some(request.auto_clear.unwrap_or(defaults.auto_clear)),
            ticker_text,
            progress: request
                .progress
                .map(|fraction| (fraction * PROGRESS_SCALE).round() as i64),
            presentation: request.presentation.clone(),
            schedule,
        }
    }

    fn resolve_date(&self, input: &DateInput, field: &str) -> Option<DateTime<Utc>> {
        let resolved = input.resolve(&self.tz);
        if resolved.is_none() {
            tracing::warn!(field, ?input, "unresolvable date, sending as invalid");
        }
        resolved
    }
}

/// Encode with stock defaults, random ids and the local time zone.
pub fn encode(request: &NotificationRequest) -> HostNotificationRecord {
    Encoder::new().encode(request)
}

fn default_ticker_text(subject: Option<&str>, message: &str) -> String {
    match subject.filter(|subject| !subject.is_empty()) {
        Some(subject) => format!("{subject}: {message}"),
        None => message.to_string(),
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

fn tri_state(value: &Option<Option<String>>, default: &str) -> Option<String> {
    match value {
        Some(explicit) => explicit.clone(),
        None => Some(default.to_string()),
    }
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
