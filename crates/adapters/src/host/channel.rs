// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message-passing host adapter.
//!
//! Each call is sent as a [`HostRequest`] carrying a one-shot reply slot.
//! The embedding platform drains the receiver on its own thread and answers
//! every request once, with either a value or an error.

use super::{HostError, HostService};
use async_trait::async_trait;
use nb_core::{HostNotificationRecord, LaunchNotification, NotificationId};
use tokio::sync::{mpsc, oneshot};

/// Slot the platform answers a request through
pub type Reply<T> = oneshot::Sender<Result<T, HostError>>;

/// One host round-trip awaiting an answer
#[derive(Debug)]
pub enum HostRequest {
    ApplicationName {
        reply: Reply<String>,
    },
    Create {
        id: NotificationId,
        record: HostNotificationRecord,
        reply: Reply<HostNotificationRecord>,
    },
    Find {
        id: NotificationId,
        reply: Reply<HostNotificationRecord>,
    },
    Delete {
        id: NotificationId,
        reply: Reply<HostNotificationRecord>,
    },
    DeleteAll {
        reply: Reply<()>,
    },
    Clear {
        id: NotificationId,
        reply: Reply<HostNotificationRecord>,
    },
    ClearAll {
        reply: Reply<()>,
    },
    Ids {
        reply: Reply<Vec<NotificationId>>,
    },
    LaunchNotification {
        reply: Reply<Option<LaunchNotification>>,
    },
    ClearLaunchNotification {
        reply: Reply<()>,
    },
}

impl HostRequest {
    pub fn name(&self) -> &'static str {
        match self {
            HostRequest::ApplicationName { .. } => "application_name",
            HostRequest::Create { .. } => "create",
            HostRequest::Find { .. } => "find",
            HostRequest::Delete { .. } => "delete",
            HostRequest::DeleteAll { .. } => "delete_all",
            HostRequest::Clear { .. } => "clear",
            HostRequest::ClearAll { .. } => "clear_all",
            HostRequest::Ids { .. } => "ids",
            HostRequest::LaunchNotification { .. } => "launch_notification",
            HostRequest::ClearLaunchNotification { .. } => "clear_launch_notification",
        }
    }
}

/// Host adapter that forwards calls over a channel.
#[derive(Clone, Debug)]
pub struct ChannelHost {
    tx: mpsc::Sender<HostRequest>,
}

impl ChannelHost {
    /// Create the adapter and the receiver the platform serves.
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<HostRequest>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self { tx }, rx)
    }

    async fn call<T, F>(&self, make: F) -> Result<T, HostError>
    where
        T: Send,
        F: FnOnce(Reply<T>) -> HostRequest + Send,
    {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| HostError::Unavailable("request channel closed".to_string()))?;
        answer
            .await
            .map_err(|_| HostError::Unavailable("request dropped without a reply".to_string()))?
    }
}

#[async_trait]
impl HostService for ChannelHost {
    async fn application_name(&self) -> Result<String, HostError> {
        self.call(|reply| HostRequest::ApplicationName { reply })
            .await
    }

    async fn create(
        &self,
        id: NotificationId,
        record: HostNotificationRecord,
    ) -> Result<HostNotificationRecord, HostError> {
        self.call(|reply| HostRequest::Create { id, record, reply })
            .await
    }

    async fn find(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        self.call(|reply| HostRequest::Find { id, reply }).await
    }

    async fn delete(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        self.call(|reply| HostRequest::Delete { id, reply }).await
    }

    async fn delete_all(&self) -> Result<(), HostError> {
        self.call(|reply| HostRequest::DeleteAll { reply }).await
    }

    async fn clear(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        self.call(|reply| HostRequest::Clear { id, reply }).await
    }

    async fn clear_all(&self) -> Result<(), HostError> {
        self.call(|reply| HostRequest::ClearAll { reply }).await
    }

    async fn ids(&self) -> Result<Vec<NotificationId>, HostError> {
        self.call(|reply| HostRequest::Ids { reply }).await
    }

    async fn launch_notification(&self) -> Result<Option<LaunchNotification>, HostError> {
        self.call(|reply| HostRequest::LaunchNotification { reply })
            .await
    }

    async fn clear_launch_notification(&self) -> Result<(), HostError> {
        self.call(|reply| HostRequest::ClearLaunchNotification { reply })
            .await
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
