//! Notification boundary for pool observers
//!
//! A destination for pool events that abstracts away who is listening. The
//! engine publishes exactly one event after each successful mutating
//! operation; delivery is observability, not correctness, so `publish` is
//! infallible from the engine's point of view.

use std::fmt;

use basin_types::PoolEvent;
use parking_lot::Mutex;
use tracing::info;

/// A destination for pool notification records
pub trait EventSink: Send + Sync + fmt::Debug {
    /// Deliver a single event.
    fn publish(&self, event: PoolEvent);
}

/// Sink that renders each event as a structured log line
#[derive(Debug, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn publish(&self, event: PoolEvent) {
        match event {
            PoolEvent::LiquidityAdded { amount_a, amount_b } => {
                info!(amount_a, amount_b, "liquidity added");
            }
            PoolEvent::LiquidityRemoved { amount_a, amount_b } => {
                info!(amount_a, amount_b, "liquidity removed");
            }
            PoolEvent::Swap { delta_a, delta_b } => {
                info!(delta_a, delta_b, "swap");
            }
        }
    }
}

/// Sink that records events in memory for later assertion
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<PoolEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in order.
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.lock().clone()
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<PoolEvent> {
        self.events.lock().last().copied()
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, event: PoolEvent) {
        self.events.lock().push(event);
    }
}
