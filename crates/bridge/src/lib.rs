// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nb-bridge: asynchronous notification API over a host service.
//!
//! Requests are encoded on the way to the host and decoded on the way back.
//! Clicks from every origin (launch, direct, host-persisted) reach listeners
//! through one [`ClickDispatcher`].

mod bridge;
mod dispatcher;

pub use bridge::NotificationBridge;
pub use dispatcher::{ClickDispatcher, Listener, ListenerId};
