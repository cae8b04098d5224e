// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nb-core: notification attribute model and the host wire codec.
//!
//! The [`Encoder`] turns a loosely specified [`NotificationRequest`] into a
//! fully defaulted [`HostNotificationRecord`]; [`decode`] turns a record
//! handed back by the host into caller-facing types again.

pub mod date;
pub mod decode;
pub mod defaults;
pub mod encode;
pub mod error;
pub mod event;
pub mod id;
pub mod payload;
pub mod presentation;
pub mod record;
pub mod repeat;
pub mod request;

pub use date::{CalendarFields, DateInput};
pub use decode::decode;
pub use defaults::CodecDefaults;
pub use encode::{encode, Encoder};
pub use error::ParseError;
pub use event::{ClickEvent, EventType, HostClickEvent, LaunchNotification};
pub use id::{IdGen, NotificationId, RandomIdGen, SequentialIdGen, ID_RANGE};
pub use presentation::{Category, Presentation};
pub use record::HostNotificationRecord;
pub use repeat::{Interval, RepeatSpec};
pub use request::{NotificationRequest, ScheduleInfo};
