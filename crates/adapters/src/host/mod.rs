// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host notification service adapters

mod channel;

pub use channel::{ChannelHost, HostRequest};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHost, HostCall};

use async_trait::async_trait;
use nb_core::{HostNotificationRecord, LaunchNotification, NotificationId};
use thiserror::Error;

/// Failures reported by the host.
///
/// The message is the host's own and is passed to callers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("{0}")]
    Rejected(String),
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// The platform service that schedules, shows and tracks notifications.
///
/// Every call is one round-trip that completes with exactly one result.
#[async_trait]
pub trait HostService: Clone + Send + Sync + 'static {
    /// Display name of the hosting application
    async fn application_name(&self) -> Result<String, HostError>;

    /// Create (or replace) the notification with `id`
    async fn create(
        &self,
        id: NotificationId,
        record: HostNotificationRecord,
    ) -> Result<HostNotificationRecord, HostError>;

    async fn find(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError>;

    /// Cancel and forget a notification
    async fn delete(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError>;

    async fn delete_all(&self) -> Result<(), HostError>;

    /// Dismiss a shown notification without forgetting its schedule
    async fn clear(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError>;

    async fn clear_all(&self) -> Result<(), HostError>;

    /// Ids of all notifications the host tracks
    async fn ids(&self) -> Result<Vec<NotificationId>, HostError>;

    /// Notification that launched the application, if any
    async fn launch_notification(&self) -> Result<Option<LaunchNotification>, HostError>;

    /// Forget the launch notification so it is not delivered twice
    async fn clear_launch_notification(&self) -> Result<(), HostError>;
}
