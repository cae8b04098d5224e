// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use nb_core::CodecDefaults;

/// Default log filter when `NB_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Small icon resource for requests without one (`NB_SMALL_ICON`).
pub fn small_icon() -> Option<String> {
    non_empty("NB_SMALL_ICON")
}

/// Channel id, name and description for requests without one (`NB_DEFAULT_CHANNEL`).
pub fn default_channel() -> Option<String> {
    non_empty("NB_DEFAULT_CHANNEL")
}

/// Action tag for requests without one (`NB_DEFAULT_ACTION`).
pub fn default_action() -> Option<String> {
    non_empty("NB_DEFAULT_ACTION")
}

/// Application display name when no host is there to ask (`NB_APP_NAME`).
pub fn app_name() -> Option<String> {
    non_empty("NB_APP_NAME")
}

/// Log filter directive (`NB_LOG`, default: warn).
pub fn log_filter() -> String {
    non_empty("NB_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Stock codec defaults with environment overrides applied.
pub fn codec_defaults() -> CodecDefaults {
    let mut defaults = CodecDefaults::default();
    if let Some(icon) = small_icon() {
        defaults = defaults.with_small_icon(icon);
    }
    if let Some(channel) = default_channel() {
        defaults = defaults.with_channel(channel);
    }
    if let Some(action) = default_action() {
        defaults = defaults.with_action(action);
    }
    defaults
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
