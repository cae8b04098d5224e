// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced host wrapper for consistent observability

use crate::host::{HostError, HostService};
use async_trait::async_trait;
use nb_core::{HostNotificationRecord, LaunchNotification, NotificationId};
use std::future::Future;
use tracing::Instrument;

/// Wrapper that adds tracing to any HostService
#[derive(Clone)]
pub struct TracedHost<H> {
    inner: H,
}

impl<H> TracedHost<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

/// Time one round-trip and log how it ended.
async fn timed<T, F>(fut: F) -> Result<T, HostError>
where
    F: Future<Output = Result<T, HostError>>,
{
    let start = std::time::Instant::now();
    let result = fut.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => tracing::debug!(elapsed_ms, "host call completed"),
        Err(e) => tracing::warn!(elapsed_ms, error = %e, "host call failed"),
    }
    result
}

#[async_trait]
impl<H: HostService> HostService for TracedHost<H> {
    async fn application_name(&self) -> Result<String, HostError> {
        timed(self.inner.application_name())
            .instrument(tracing::debug_span!("host.application_name"))
            .await
    }

    async fn create(
        &self,
        id: NotificationId,
        record: HostNotificationRecord,
    ) -> Result<HostNotificationRecord, HostError> {
        async {
            tracing::info!(
                scheduled = record.schedule.scheduled.unwrap_or(false),
                delayed = record.schedule.delayed.unwrap_or(false),
                channel = record.channel_id.as_deref(),
                "creating"
            );
            timed(self.inner.create(id, record)).await
        }
        .instrument(tracing::info_span!("host.create", id))
        .await
    }

    async fn find(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        timed(self.inner.find(id))
            .instrument(tracing::debug_span!("host.find", id))
            .await
    }

    async fn delete(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        timed(self.inner.delete(id))
            .instrument(tracing::info_span!("host.delete", id))
            .await
    }

    async fn delete_all(&self) -> Result<(), HostError> {
        timed(self.inner.delete_all())
            .instrument(tracing::info_span!("host.delete_all"))
            .await
    }

    async fn clear(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        timed(self.inner.clear(id))
            .instrument(tracing::info_span!("host.clear", id))
            .await
    }

    async fn clear_all(&self) -> Result<(), HostError> {
        timed(self.inner.clear_all())
            .instrument(tracing::info_span!("host.clear_all"))
            .await
    }

    async fn ids(&self) -> Result<Vec<NotificationId>, HostError> {
        let result = self.inner.ids().await;
        tracing::trace!(count = result.as_ref().map(|ids| ids.len()).ok(), "listed ids");
        result
    }

    async fn launch_notification(&self) -> Result<Option<LaunchNotification>, HostError> {
        let result = self.inner.launch_notification().await;
        tracing::debug_span!("host.launch_notification").in_scope(|| match &result {
            Ok(Some(launch)) => tracing::info!(id = launch.id, action = %launch.action, "app launched from notification"),
            Ok(None) => tracing::trace!("no launch notification"),
            Err(e) => tracing::warn!(error = %e, "launch query failed"),
        });
        result
    }

    async fn clear_launch_notification(&self) -> Result<(), HostError> {
        let result = self.inner.clear_launch_notification().await;
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "clearing launch notification failed");
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
