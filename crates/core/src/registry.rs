// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events and the registry that holds them
//!
//! An [`Event`] keeps its subscribers in registration order. Each
//! subscriber gets a per-event sequence number when it is inserted; the
//! ordered map keyed by that number drives publish order, and a name
//! index answers "is this name taken" without scanning.

use crate::subscriber::{EventName, Subscriber, SubscriberName};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A named channel with its ordered subscribers
pub struct Event<P> {
    name: EventName,
    subscribers: BTreeMap<u64, Subscriber<P>>,
    index: HashMap<SubscriberName, u64>,
    next_seq: u64,
}

impl<P> Event<P> {
    /// Create an event with no subscribers
    pub fn new(name: impl Into<EventName>) -> Self {
        Self {
            name: name.into(),
            subscribers: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Create an event pre-populated with subscribers, in iteration order.
    /// Later duplicates of a name are dropped.
    pub fn with_subscribers(
        name: impl Into<EventName>,
        subscribers: impl IntoIterator<Item = Subscriber<P>>,
    ) -> Self {
        let mut event = Self::new(name);
        for subscriber in subscribers {
            event.insert(subscriber);
        }
        event
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    /// Append a subscriber unless one with the same name exists.
    /// Returns false when the name was already taken.
    pub fn insert(&mut self, subscriber: Subscriber<P>) -> bool {
        if self.index.contains_key(subscriber.name()) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(subscriber.name().clone(), seq);
        self.subscribers.insert(seq, subscriber);
        true
    }

    /// Remove the subscriber with the given name, if present
    pub fn remove(&mut self, name: &SubscriberName) -> Option<Subscriber<P>> {
        let seq = self.index.remove(name)?;
        self.subscribers.remove(&seq)
    }

    /// Look up a subscriber by name
    pub fn subscriber(&self, name: &SubscriberName) -> Option<&Subscriber<P>> {
        self.index
            .get(name)
            .and_then(|seq| self.subscribers.get(seq))
    }

    pub fn contains(&self, name: &SubscriberName) -> bool {
        self.index.contains_key(name)
    }

    /// Subscribers in registration order
    pub fn subscribers(&self) -> impl Iterator<Item = &Subscriber<P>> {
        self.subscribers.values()
    }

    /// Subscriber names in registration order
    pub fn subscriber_names(&self) -> Vec<SubscriberName> {
        self.subscribers().map(|s| s.name().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<P> Clone for Event<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            subscribers: self.subscribers.clone(),
            index: self.index.clone(),
            next_seq: self.next_seq,
        }
    }
}

impl<P> fmt::Debug for Event<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("subscribers", &self.subscriber_names())
            .finish()
    }
}

/// All events known to one bus
pub struct Registry<P> {
    events: HashMap<EventName, Event<P>>,
}

impl<P> Registry<P> {
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    pub fn get(&self, name: &EventName) -> Option<&Event<P>> {
        self.events.get(name)
    }

    pub fn get_mut(&mut self, name: &EventName) -> Option<&mut Event<P>> {
        self.events.get_mut(name)
    }

    /// Return the named event, creating an empty one if missing
    pub fn get_or_create(&mut self, name: &EventName) -> &mut Event<P> {
        self.events
            .entry(name.clone())
            .or_insert_with(|| Event::new(name.clone()))
    }

    /// Insert an event, replacing any event with the same name
    pub fn insert(&mut self, event: Event<P>) -> Option<Event<P>> {
        self.events.insert(event.name().clone(), event)
    }

    pub fn contains(&self, name: &EventName) -> bool {
        self.events.contains_key(name)
    }

    /// Events in no particular order
    pub fn events(&self) -> impl Iterator<Item = &Event<P>> {
        self.events.values()
    }

    /// Event names, sorted
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.events.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Handler-free view of the registry contents
    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            events: self
                .events()
                .map(|e| (e.name().clone(), e.subscriber_names()))
                .collect(),
        }
    }
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for Registry<P> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<P> fmt::Debug for Registry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.summary().events)
            .finish()
    }
}

/// Event names mapped to their subscriber names (in registration order)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub events: BTreeMap<EventName, Vec<SubscriberName>>,
}

impl RegistrySummary {
    /// Compact JSON form, used in trace records
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for RegistrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (event, subscribers) in &self.events {
            if subscribers.is_empty() {
                writeln!(f, "{}: (none)", event)?;
            } else {
                let names: Vec<&str> = subscribers.iter().map(|s| s.as_str()).collect();
                writeln!(f, "{}: {}", event, names.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
