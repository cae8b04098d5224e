// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Click event dispatcher.
//!
//! Each bridge owns its own listener registry.

use nb_core::ClickEvent;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Callback invoked for each click
pub type Listener = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// Handle returned by [`ClickDispatcher::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

#[derive(Default)]
struct DispatcherState {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Fan-out of click events to registered listeners
#[derive(Clone, Default)]
pub struct ClickDispatcher {
    inner: Arc<Mutex<DispatcherState>>,
}

impl ClickDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        self.subscribe_shared(Arc::new(listener))
    }

    pub fn subscribe_shared(&self, listener: Listener) -> ListenerId {
        let mut state = self.inner.lock();
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        state.listeners.push((id, listener));
        id
    }

    /// Remove one listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut state = self.inner.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    /// Remove every listener, returning how many were registered.
    pub fn remove_all(&self) -> usize {
        let mut state = self.inner.lock();
        std::mem::take(&mut state.listeners).len()
    }

    /// Deliver `event` to every listener in subscription order.
    ///
    /// Listeners run outside the registry lock and may subscribe or
    /// unsubscribe; changes apply from the next event on.
    pub fn emit(&self, event: &ClickEvent) -> usize {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl fmt::Debug for ClickDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
