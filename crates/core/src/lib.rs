// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! msgbus-core: in-process publish/subscribe message bus
//!
//! This crate provides:
//! - `MessageBus` - register named subscribers on named events and publish
//!   data to them synchronously, in registration order
//! - `Registry` / `Event` - snapshots of the bus contents
//! - `PublishReport` - what each publish delivered, skipped or failed
//! - `PublishQueue` - funnel publishes from other threads onto one task

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod bus;
mod config;
mod delivery;
mod error;
mod queue;
mod registry;
mod subscriber;

pub use bus::{MessageBus, API_VERSION};
pub use config::{BusConfig, FailurePolicy};
pub use delivery::{deliver, Delivery, DeliveryError, DeliveryFailure, PublishReport};
pub use error::{ConfigError, QueueError};
pub use queue::{Publication, PublishPump, PublishQueue};
pub use registry::{Event, Registry, RegistrySummary};
pub use subscriber::{EventName, Handler, HandlerResult, Subscriber, SubscriberName};
