// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Click events delivered when the user interacts with a notification.

use crate::error::ParseError;
use crate::id::NotificationId;
use crate::payload;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Public event names. Both alias the single click stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Press,
    Click,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Press => "press",
            EventType::Click => "click",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "press" => Ok(EventType::Press),
            "click" => Ok(EventType::Click),
            other => Err(ParseError::UnknownEventType(other.to_string())),
        }
    }
}

/// Click as observed by listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub action: String,
    pub payload: Value,
}

/// Click as the host reports it, payload still serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostClickEvent {
    pub action: String,
    pub payload: String,
}

impl HostClickEvent {
    pub fn new(action: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            payload: payload.into(),
        }
    }

    pub fn decode(self) -> ClickEvent {
        ClickEvent {
            action: self.action,
            payload: decode_event_payload(&self.payload),
        }
    }
}

/// Notification that started the application, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchNotification {
    pub id: NotificationId,
    pub action: String,
    pub payload: String,
}

impl LaunchNotification {
    /// The click to replay, or `None` when the host reports id `0` (no launch).
    pub fn into_event(self) -> Option<ClickEvent> {
        if self.id == 0 {
            return None;
        }
        Some(HostClickEvent::new(self.action, self.payload).decode())
    }
}

fn decode_event_payload(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    payload::decode_payload(text)
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
