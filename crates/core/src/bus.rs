// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message bus: register, unregister and publish by event name

use crate::config::{BusConfig, FailurePolicy};
use crate::delivery::{deliver, Delivery, PublishReport};
use crate::registry::{Event, Registry};
use crate::subscriber::{EventName, Subscriber, SubscriberName};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace, warn};

/// Version of the bus API surface
pub const API_VERSION: &str = "1.0.0";

/// The message bus routes published data to the subscribers of an event.
///
/// Clones share the same registry.
pub struct MessageBus<P = serde_json::Value> {
    registry: Arc<RwLock<Registry<P>>>,
    config: Arc<BusConfig>,
}

impl<P> MessageBus<P> {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::new())),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Return the API version
    pub fn api_version(&self) -> &'static str {
        debug!("api_version");
        API_VERSION
    }

    /// Register a subscriber to the given event.
    ///
    /// The event is created if it does not exist. If a subscriber with the
    /// same name is already registered it is kept, not replaced.
    pub fn register(&self, event_name: impl Into<EventName>, subscriber: Subscriber<P>) {
        let event_name = event_name.into();
        debug!(event = %event_name, subscriber = %subscriber.name(), "register");

        {
            let mut registry = self.write();
            let event = registry.get_or_create(&event_name);
            let name = subscriber.name().clone();
            if !event.insert(subscriber) {
                debug!(
                    event = %event_name,
                    subscriber = %name,
                    "subscriber already registered"
                );
            }
        }

        self.trace_registry();
    }

    /// Remove a subscriber from the given event.
    ///
    /// Unknown events and unknown subscribers are ignored.
    pub fn unregister(
        &self,
        event_name: impl Into<EventName>,
        subscriber_name: impl Into<SubscriberName>,
    ) {
        let event_name = event_name.into();
        let subscriber_name = subscriber_name.into();
        debug!(event = %event_name, subscriber = %subscriber_name, "unregister");

        {
            let mut registry = self.write();
            if let Some(event) = registry.get_mut(&event_name) {
                if event.remove(&subscriber_name).is_none() {
                    debug!(
                        event = %event_name,
                        subscriber = %subscriber_name,
                        "subscriber not registered"
                    );
                }
            }
        }

        self.trace_registry();
    }

    /// Publish data to every subscriber of the event, in registration order.
    ///
    /// Subscribers without a handler are skipped. Handler failures are
    /// collected in the report; whether delivery continues after one
    /// depends on the configured [`FailurePolicy`]. An unknown event
    /// yields an empty report.
    pub fn publish(&self, event_name: impl Into<EventName>, event_data: &P) -> PublishReport {
        let event_name = event_name.into();
        debug!(event = %event_name, "publish");

        // Handlers run without the lock held so they can call back into the bus
        let subscribers: Vec<Subscriber<P>> = match self.read().get(&event_name) {
            Some(event) => event.subscribers().cloned().collect(),
            None => Vec::new(),
        };

        let mut report = PublishReport::new(event_name);
        for subscriber in &subscribers {
            trace!(subscriber = %subscriber.name(), "invoking subscriber");
            let delivery = deliver(subscriber, event_data);
            let failed = matches!(delivery, Delivery::Failed(_));
            if let Delivery::Failed(error) = &delivery {
                warn!(
                    event = %report.event,
                    subscriber = %subscriber.name(),
                    error = %error,
                    "subscriber failed"
                );
            }
            report.record(subscriber.name(), delivery);

            if failed && self.config.failure_policy == FailurePolicy::Abort {
                report.aborted = report.attempted() < subscribers.len();
                break;
            }
        }

        self.trace_registry();
        report
    }

    /// Return a snapshot of the named event.
    ///
    /// When `create_if_not_exist` is set, a missing event is created empty
    /// and inserted into the registry first.
    pub fn get_event(
        &self,
        event_name: impl Into<EventName>,
        create_if_not_exist: bool,
    ) -> Option<Event<P>> {
        let event_name = event_name.into();
        debug!(event = %event_name, create_if_not_exist, "get_event");

        if create_if_not_exist {
            let mut registry = self.write();
            Some(registry.get_or_create(&event_name).clone())
        } else {
            self.read().get(&event_name).cloned()
        }
    }

    /// Return the subscriber of `event` with the given name
    pub fn get_subscriber<'a>(
        &self,
        event: &'a Event<P>,
        subscriber_name: &SubscriberName,
    ) -> Option<&'a Subscriber<P>> {
        debug!(event = %event.name(), subscriber = %subscriber_name, "get_subscriber");
        event.subscriber(subscriber_name)
    }

    /// Return a snapshot of the whole registry.
    ///
    /// Changes made to the snapshot do not affect the bus.
    pub fn registry(&self) -> Registry<P> {
        debug!("registry");
        self.read().clone()
    }

    pub fn contains_event(&self, event_name: &EventName) -> bool {
        self.read().contains(event_name)
    }

    /// Number of events in the registry
    pub fn event_count(&self) -> usize {
        self.read().len()
    }

    /// Number of subscribers on an event (0 if the event is unknown)
    pub fn subscriber_count(&self, event_name: &EventName) -> usize {
        self.read().get(event_name).map_or(0, |e| e.len())
    }

    /// Insert an event directly, replacing any event with the same name
    #[cfg(any(test, feature = "test-support"))]
    pub fn seed(&self, event: Event<P>) {
        self.write().insert(event);
    }

    fn trace_registry(&self) {
        if self.config.log_registry && tracing::enabled!(tracing::Level::TRACE) {
            let summary = self.read().summary();
            trace!(registry = %summary.to_json(), "registry content");
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry<P>> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<P>> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<P> Default for MessageBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for MessageBus<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: Arc::clone(&self.config),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
