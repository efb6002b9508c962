//! Typed event bus for change notifications.
//!
//! Uses a tokio broadcast channel so any number of consumers can follow
//! discrete changes (one event per acknowledged mutation) without holding
//! a reference to the store that produced them.

use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The enquiry list was replaced by a fetch.
    EnquiriesLoaded {
        count: usize,
    },
    /// A created enquiry was appended to the list.
    EnquiryCreated {
        enquiry_id: String,
    },
    /// An enquiry was removed after the server acknowledged the delete.
    EnquiryRemoved {
        enquiry_id: String,
    },
    /// An enquiry was marked read and selected.
    EnquiryRead {
        enquiry_id: String,
    },
}

/// Application-wide event bus backed by a tokio broadcast channel.
///
/// Every subscriber gets every event. Slow subscribers that fall behind
/// receive a `Lagged` error and miss events.
#[derive(Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<AppEvent>>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Subscribe to receive application events.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers.
    pub fn emit(&self, event: AppEvent) {
        let label = event_label(&event);
        match self.sender.send(event) {
            Ok(count) => {
                debug!("event_bus: emitted {label} to {count} subscriber(s)");
            }
            Err(_) => {
                debug!("event_bus: no subscribers for {label}");
            }
        }
    }

    /// Get the current number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(pl_core::constants::EVENT_BUS_CAPACITY)
    }
}

/// Human-readable label for an event (for logging).
fn event_label(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::EnquiriesLoaded { .. } => "EnquiriesLoaded",
        AppEvent::EnquiryCreated { .. } => "EnquiryCreated",
        AppEvent::EnquiryRemoved { .. } => "EnquiryRemoved",
        AppEvent::EnquiryRead { .. } => "EnquiryRead",
    }
}
