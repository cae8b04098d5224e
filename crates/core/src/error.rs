// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised when parsing keywords at the API boundary.
//!
//! The codec itself never fails; these only surface from `FromStr`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown repeat interval: {0}")]
    UnknownInterval(String),
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
}
