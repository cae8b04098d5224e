// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payload serialization.
//!
//! The host stores the caller's structured payload as one opaque text blob.

use serde_json::{Map, Value};

/// Serialize a payload for the host. Missing or null payloads become `{}`.
pub fn encode_payload(payload: Option<&Value>) -> String {
    match payload {
        Some(value) if !value.is_null() => value.to_string(),
        _ => Value::Object(Map::new()).to_string(),
    }
}

/// Parse a payload blob from the host.
///
/// Text that is not JSON is kept as a string value rather than dropped.
pub fn decode_payload(text: &str) -> Value {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, len = text.len(), "payload is not valid JSON, keeping raw text");
            Value::String(text.to_string())
        }
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
