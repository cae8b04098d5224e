// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-facing notification API.
//!
//! Every operation is one round-trip to the host. Host failures are returned
//! as-is without retry.

use crate::dispatcher::{ClickDispatcher, Listener, ListenerId};
use chrono::{Local, TimeZone};
use nb_adapters::{HostError, HostService, TracedHost};
use nb_core::{
    decode, ClickEvent, CodecDefaults, Encoder, EventType, HostClickEvent, IdGen,
    NotificationId, NotificationRequest, RandomIdGen,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Notification API bound to one host service.
#[derive(Clone)]
pub struct NotificationBridge<H, G = RandomIdGen, Tz: TimeZone = Local> {
    host: H,
    encoder: Encoder<G, Tz>,
    clicks: ClickDispatcher,
}

impl<H: HostService> NotificationBridge<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            encoder: Encoder::new(),
            clicks: ClickDispatcher::new(),
        }
    }

    /// Bridge whose host calls are traced
    pub fn traced(host: H) -> NotificationBridge<TracedHost<H>> {
        NotificationBridge::new(TracedHost::new(host))
    }
}

impl<H, G, Tz> NotificationBridge<H, G, Tz>
where
    H: HostService,
    G: IdGen,
    Tz: TimeZone,
{
    pub fn with_defaults(mut self, defaults: CodecDefaults) -> Self {
        self.encoder = self.encoder.with_defaults(defaults);
        self
    }

    pub fn with_encoder<G2: IdGen, Tz2: TimeZone>(
        self,
        encoder: Encoder<G2, Tz2>,
    ) -> NotificationBridge<H, G2, Tz2> {
        NotificationBridge {
            host: self.host,
            encoder,
            clicks: self.clicks,
        }
    }

    pub fn with_dispatcher(mut self, clicks: ClickDispatcher) -> Self {
        self.clicks = clicks;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn dispatcher(&self) -> &ClickDispatcher {
        &self.clicks
    }

    /// Create a notification.
    ///
    /// A missing or empty subject becomes the application's display name.
    /// Failing to look that name up fails the whole call.
    pub async fn create(
        &self,
        request: &NotificationRequest,
    ) -> Result<NotificationRequest, HostError> {
        let app_name = self.host.application_name().await?;

        let record = if request.subject.as_deref().map_or(true, str::is_empty) {
            self.encoder.encode(&NotificationRequest {
                subject: Some(app_name),
                ..request.clone()
            })
        } else {
            self.encoder.encode(request)
        };

        let created = self.host.create(record.id, record).await?;
        Ok(decode(created))
    }

    pub async fn find(&self, id: NotificationId) -> Result<NotificationRequest, HostError> {
        self.host.find(id).await.map(decode)
    }

    pub async fn delete(&self, id: NotificationId) -> Result<NotificationRequest, HostError> {
        self.host.delete(id).await.map(decode)
    }

    pub async fn delete_all(&self) -> Result<(), HostError> {
        self.host.delete_all().await
    }

    pub async fn clear(&self, id: NotificationId) -> Result<NotificationRequest, HostError> {
        self.host.clear(id).await.map(decode)
    }

    pub async fn clear_all(&self) -> Result<(), HostError> {
        self.host.clear_all().await
    }

    pub async fn ids(&self) -> Result<Vec<NotificationId>, HostError> {
        self.host.ids().await
    }

    /// Listen for clicks.
    ///
    /// If the app was launched from a notification, `listener` alone is
    /// called once with that click and the host forgets it.
    pub async fn add_listener<F>(&self, event: EventType, listener: F) -> ListenerId
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let id = self.clicks.subscribe_shared(Arc::clone(&listener));
        tracing::debug!(%event, %id, "listener added");

        match self.host.launch_notification().await {
            Ok(Some(launch)) => {
                let launch_id = launch.id;
                if let Some(click) = launch.into_event() {
                    tracing::info!(launch_id, action = %click.action, "replaying launch notification");
                    listener(&click);
                    if let Err(e) = self.host.clear_launch_notification().await {
                        tracing::warn!(error = %e, "failed to clear launch notification");
                    }
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "launch notification query failed"),
        }

        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.clicks.unsubscribe(id)
    }

    /// Drop every click listener, however many call sites added one.
    pub fn remove_all_listeners(&self, event: EventType) -> usize {
        let removed = self.clicks.remove_all();
        tracing::debug!(%event, removed, "listeners removed");
        removed
    }

    /// Decode a click the host raised on its own and hand it to listeners.
    pub fn deliver_host_click(&self, event: HostClickEvent) -> usize {
        deliver(&self.clicks, event)
    }

    /// Pump host-raised clicks until the sender side closes.
    pub fn forward_host_clicks(&self, mut events: mpsc::Receiver<HostClickEvent>) -> JoinHandle<()> {
        let clicks = self.clicks.clone();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                deliver(&clicks, event);
            }
            tracing::debug!("host click stream closed");
        })
    }
}

fn deliver(clicks: &ClickDispatcher, event: HostClickEvent) -> usize {
    let click = event.decode();
    let delivered = clicks.emit(&click);
    tracing::debug!(action = %click.action, delivered, "host click delivered");
    delivered
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
