// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Funnel publishes from other threads onto one task
//!
//! [`PublishQueue`] handles can be cloned and sent anywhere. A single
//! [`PublishPump`] owns the receiving end and calls
//! [`MessageBus::publish`] for each queued item in the order it arrived.

use crate::bus::MessageBus;
use crate::delivery::PublishReport;
use crate::error::QueueError;
use crate::subscriber::EventName;
use tokio::sync::mpsc;
use tracing::debug;

/// A queued publish request
#[derive(Debug, Clone)]
pub struct Publication<P> {
    pub event: EventName,
    pub data: P,
}

/// Sending half: enqueue publishes from any thread or task
pub struct PublishQueue<P> {
    tx: mpsc::UnboundedSender<Publication<P>>,
}

impl<P> PublishQueue<P> {
    /// Enqueue a publish. Fails once the pump has been dropped.
    pub fn publish(&self, event: impl Into<EventName>, data: P) -> Result<(), QueueError> {
        self.tx
            .send(Publication {
                event: event.into(),
                data,
            })
            .map_err(|_| QueueError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<P> Clone for PublishQueue<P> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiving half: delivers queued publishes through the bus
pub struct PublishPump<P> {
    bus: MessageBus<P>,
    rx: mpsc::UnboundedReceiver<Publication<P>>,
}

impl<P> PublishPump<P> {
    /// Publish everything until all queue handles are dropped.
    /// Returns one report per publication, in the order they were processed.
    pub async fn run(mut self) -> Vec<PublishReport> {
        let mut reports = Vec::new();
        while let Some(publication) = self.rx.recv().await {
            reports.push(self.bus.publish(publication.event, &publication.data));
        }
        debug!(
            processed = reports.len(),
            failed = reports.iter().filter(|r| !r.is_clean()).count(),
            "publish queue closed"
        );
        reports
    }

    /// Publish whatever is queued right now without waiting
    pub fn drain(&mut self) -> Vec<PublishReport> {
        let mut reports = Vec::new();
        while let Ok(publication) = self.rx.try_recv() {
            reports.push(self.bus.publish(publication.event, &publication.data));
        }
        reports
    }
}

impl<P> MessageBus<P> {
    /// Create a queue/pump pair bound to this bus
    pub fn publish_queue(&self) -> (PublishQueue<P>, PublishPump<P>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            PublishQueue { tx },
            PublishPump {
                bus: self.clone(),
                rx,
            },
        )
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
