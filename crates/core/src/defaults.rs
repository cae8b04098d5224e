// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Values the encoder falls back to for absent attributes.

/// Launcher icon resource every app ships with.
pub const DEFAULT_SMALL_ICON: &str = "ic_launcher_foreground";
/// Routing tag for notifications without an explicit action.
pub const DEFAULT_ACTION: &str = "DEFAULT";
pub const DEFAULT_CHANNEL: &str = "default-channel";
/// Host keyword selecting the system sound, vibration pattern or light.
pub const SYSTEM_DEFAULT: &str = "default";

/// Defaults applied by [`crate::Encoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecDefaults {
    pub small_icon: String,
    pub action: String,
    pub channel_id: String,
    pub channel_name: String,
    pub channel_description: String,
    pub auto_clear: bool,
    pub priority: i32,
    pub sound: String,
    pub vibrate: String,
    pub lights: String,
}

impl Default for CodecDefaults {
    fn default() -> Self {
        Self {
            small_icon: DEFAULT_SMALL_ICON.to_string(),
            action: DEFAULT_ACTION.to_string(),
            channel_id: DEFAULT_CHANNEL.to_string(),
            channel_name: DEFAULT_CHANNEL.to_string(),
            channel_description: DEFAULT_CHANNEL.to_string(),
            auto_clear: true,
            priority: 1,
            sound: SYSTEM_DEFAULT.to_string(),
            vibrate: SYSTEM_DEFAULT.to_string(),
            lights: SYSTEM_DEFAULT.to_string(),
        }
    }
}

impl CodecDefaults {
    /// Use one channel for id, name and description.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        let channel = channel.into();
        self.channel_id = channel.clone();
        self.channel_name = channel.clone();
        self.channel_description = channel;
        self
    }

    pub fn with_small_icon(mut self, icon: impl Into<String>) -> Self {
        self.small_icon = icon.into();
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }
}
