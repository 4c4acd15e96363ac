// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscribers and their handlers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Result returned by a handler. The success value carries nothing.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A unary callable invoked with the published payload
pub type Handler<P> = Arc<dyn Fn(&P) -> HandlerResult + Send + Sync>;

/// Name of an event channel
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(pub String);

impl EventName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Name of a subscriber, unique within one event
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberName(pub String);

impl SubscriberName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubscriberName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SubscriberName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A named handler registered against one event
pub struct Subscriber<P> {
    name: SubscriberName,
    handler: Option<Handler<P>>,
}

impl<P> Subscriber<P> {
    /// Create a subscriber from a fallible closure
    pub fn new<F>(name: impl Into<SubscriberName>, handler: F) -> Self
    where
        F: Fn(&P) -> HandlerResult + Send + Sync + 'static,
    {
        let handler: Handler<P> = Arc::new(handler);
        Self::with_handler(name, handler)
    }

    /// Create a subscriber from a closure that cannot fail
    pub fn from_fn<F>(name: impl Into<SubscriberName>, handler: F) -> Self
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        Self::new(name, move |data: &P| {
            handler(data);
            Ok(())
        })
    }

    /// Create a subscriber with an already shared handler
    pub fn with_handler(name: impl Into<SubscriberName>, handler: Handler<P>) -> Self {
        Self {
            name: name.into(),
            handler: Some(handler),
        }
    }

    /// A subscriber with no handler. Publishing skips it.
    pub fn without_handler(name: impl Into<SubscriberName>) -> Self {
        Self {
            name: name.into(),
            handler: None,
        }
    }

    pub fn name(&self) -> &SubscriberName {
        &self.name
    }

    pub fn handler(&self) -> Option<&Handler<P>> {
        self.handler.as_ref()
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// True if both subscribers point at the same handler allocation
    pub fn same_handler(&self, other: &Subscriber<P>) -> bool {
        match (&self.handler, &other.handler) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Manual impls: deriving would require `P: Clone` / `P: Debug`.
impl<P> Clone for Subscriber<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<P> fmt::Debug for Subscriber<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("name", &self.name)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "subscriber_tests.rs"]
mod tests;
