// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HostError, HostService};
use async_trait::async_trait;
use nb_core::{HostNotificationRecord, LaunchNotification, NotificationId};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ApplicationName,
    Create {
        id: NotificationId,
        record: HostNotificationRecord,
    },
    Find {
        id: NotificationId,
    },
    Delete {
        id: NotificationId,
    },
    DeleteAll,
    Clear {
        id: NotificationId,
    },
    ClearAll,
    Ids,
    LaunchNotification,
    ClearLaunchNotification,
}

struct FakeHostState {
    app_name: String,
    records: BTreeMap<NotificationId, HostNotificationRecord>,
    cleared: Vec<NotificationId>,
    launch: Option<LaunchNotification>,
    failure: Option<HostError>,
    calls: Vec<HostCall>,
}

/// In-memory host that records every call
#[derive(Clone)]
pub struct FakeHost {
    inner: Arc<Mutex<FakeHostState>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeHostState {
                app_name: "Fake App".to_string(),
                records: BTreeMap::new(),
                cleared: Vec::new(),
                launch: None,
                failure: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app_name(self, name: impl Into<String>) -> Self {
        self.inner.lock().app_name = name.into();
        self
    }

    /// Report `launch` as the notification that started the app
    pub fn set_launch(&self, launch: Option<LaunchNotification>) {
        self.inner.lock().launch = launch;
    }

    /// Fail every following call with `error` until [`FakeHost::recover`]
    pub fn fail_with(&self, error: HostError) {
        self.inner.lock().failure = Some(error);
    }

    pub fn recover(&self) {
        self.inner.lock().failure = None;
    }

    /// Insert a record as if the host already tracked it
    pub fn insert(&self, record: HostNotificationRecord) {
        self.inner.lock().records.insert(record.id, record);
    }

    /// Get a stored record
    pub fn record(&self, id: NotificationId) -> Option<HostNotificationRecord> {
        self.inner.lock().records.get(&id).cloned()
    }

    /// Ids dismissed through `clear`
    pub fn cleared(&self) -> Vec<NotificationId> {
        self.inner.lock().cleared.clone()
    }

    pub fn launch(&self) -> Option<LaunchNotification> {
        self.inner.lock().launch.clone()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.lock().calls.clone()
    }

    fn begin(&self, call: HostCall) -> Result<parking_lot::MutexGuard<'_, FakeHostState>, HostError> {
        let mut state = self.inner.lock();
        state.calls.push(call);
        if let Some(error) = state.failure.clone() {
            return Err(error);
        }
        Ok(state)
    }
}

fn not_found(id: NotificationId) -> HostError {
    HostError::Rejected(format!("notification {id} not found"))
}

#[async_trait]
impl HostService for FakeHost {
    async fn application_name(&self) -> Result<String, HostError> {
        let state = self.begin(HostCall::ApplicationName)?;
        Ok(state.app_name.clone())
    }

    async fn create(
        &self,
        id: NotificationId,
        record: HostNotificationRecord,
    ) -> Result<HostNotificationRecord, HostError> {
        let mut state = self.begin(HostCall::Create {
            id,
            record: record.clone(),
        })?;
        state.records.insert(id, record.clone());
        Ok(record)
    }

    async fn find(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        let state = self.begin(HostCall::Find { id })?;
        state.records.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        let mut state = self.begin(HostCall::Delete { id })?;
        state.records.remove(&id).ok_or_else(|| not_found(id))
    }

    async fn delete_all(&self) -> Result<(), HostError> {
        let mut state = self.begin(HostCall::DeleteAll)?;
        state.records.clear();
        Ok(())
    }

    async fn clear(&self, id: NotificationId) -> Result<HostNotificationRecord, HostError> {
        let mut state = self.begin(HostCall::Clear { id })?;
        let record = state.records.get(&id).cloned().ok_or_else(|| not_found(id))?;
        state.cleared.push(id);
        Ok(record)
    }

    async fn clear_all(&self) -> Result<(), HostError> {
        let mut state = self.begin(HostCall::ClearAll)?;
        let ids: Vec<_> = state.records.keys().copied().collect();
        state.cleared.extend(ids);
        Ok(())
    }

    async fn ids(&self) -> Result<Vec<NotificationId>, HostError> {
        let state = self.begin(HostCall::Ids)?;
        Ok(state.records.keys().copied().collect())
    }

    async fn launch_notification(&self) -> Result<Option<LaunchNotification>, HostError> {
        let state = self.begin(HostCall::LaunchNotification)?;
        Ok(state.launch.clone())
    }

    async fn clear_launch_notification(&self) -> Result<(), HostError> {
        let mut state = self.begin(HostCall::ClearLaunchNotification)?;
        state.launch = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
