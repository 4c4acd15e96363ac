// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler invocation and publish outcomes

use crate::subscriber::{EventName, Subscriber, SubscriberName};
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;

/// Why a single handler invocation failed
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum DeliveryError {
    #[error("handler failed: {0}")]
    Handler(String),
    #[error("handler panicked: {0}")]
    Panicked(String),
}

/// A failed delivery to one subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryFailure {
    pub subscriber: SubscriberName,
    pub error: DeliveryError,
}

/// Outcome of invoking one subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The subscriber has no handler
    Skipped,
    Failed(DeliveryError),
}

/// Invoke a subscriber's handler, converting errors and panics into
/// [`DeliveryError`]s
pub fn deliver<P>(subscriber: &Subscriber<P>, data: &P) -> Delivery {
    let Some(handler) = subscriber.handler() else {
        return Delivery::Skipped;
    };

    match catch_unwind(AssertUnwindSafe(|| handler(data))) {
        Ok(Ok(())) => Delivery::Delivered,
        Ok(Err(e)) => Delivery::Failed(DeliveryError::Handler(e.to_string())),
        Err(panic) => Delivery::Failed(DeliveryError::Panicked(panic_message(panic.as_ref()))),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Summary of one publish call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub event: EventName,
    /// Subscribers whose handler ran to completion
    pub delivered: Vec<SubscriberName>,
    /// Subscribers without a handler
    pub skipped: Vec<SubscriberName>,
    pub failures: Vec<DeliveryFailure>,
    /// Set when the abort policy left later subscribers un-notified
    pub aborted: bool,
}

impl PublishReport {
    pub fn new(event: EventName) -> Self {
        Self {
            event,
            delivered: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
            aborted: false,
        }
    }

    pub(crate) fn record(&mut self, subscriber: &SubscriberName, delivery: Delivery) {
        match delivery {
            Delivery::Delivered => self.delivered.push(subscriber.clone()),
            Delivery::Skipped => self.skipped.push(subscriber.clone()),
            Delivery::Failed(error) => self.failures.push(DeliveryFailure {
                subscriber: subscriber.clone(),
                error,
            }),
        }
    }

    /// True if no handler failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of subscribers whose handler failed, in invocation order
    pub fn failed(&self) -> Vec<&SubscriberName> {
        self.failures.iter().map(|f| &f.subscriber).collect()
    }

    /// Number of subscribers that were invoked or skipped
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.skipped.len() + self.failures.len()
    }
}

impl fmt::Display for PublishReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "published {}: delivered={} skipped={} failed={}",
            self.event,
            self.delivered.len(),
            self.skipped.len(),
            self.failures.len()
        )?;
        if self.aborted {
            write!(f, " (aborted)")?;
        }
        for failure in &self.failures {
            write!(f, "\n  failed {}: {}", failure.subscriber, failure.error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "delivery_tests.rs"]
mod tests;
