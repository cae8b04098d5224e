// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification id generation

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Integer id the host uses to address a notification.
pub type NotificationId = i64;

/// Upper bound (exclusive) of generated ids.
pub const ID_RANGE: NotificationId = 100_000;

/// Generates ids for requests that did not bring their own
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> NotificationId;
}

/// Uniform random ids in `[0, ID_RANGE)` for production use
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGen;

impl IdGen for RandomIdGen {
    fn next(&self) -> NotificationId {
        rand::random_range(0..ID_RANGE)
    }
}

/// Sequential id generator for testing
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    counter: Arc<AtomicI64>,
}

impl SequentialIdGen {
    pub fn new(start: NotificationId) -> Self {
        Self {
            counter: Arc::new(AtomicI64::new(start)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> NotificationId {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
