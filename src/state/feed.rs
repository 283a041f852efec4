//! Reactive Log Feed
//!
//! Signal-backed [`StreamObserver`] that a log view renders from.

use leptos::*;

use super::log::{Message, MessageLog};
use super::stream::{LinkStatus, StreamObserver};

/// Messages and link status for one mounted log view
#[derive(Clone, Copy)]
pub struct LogFeed {
    /// Received messages, in arrival order
    pub log: RwSignal<MessageLog>,
    /// Connection health
    pub status: RwSignal<LinkStatus>,
}

impl LogFeed {
    /// Create an empty feed owned by the current reactive owner
    pub fn new() -> Self {
        Self {
            log: create_rw_signal(MessageLog::new()),
            status: create_rw_signal(LinkStatus::default()),
        }
    }

    /// "Last message HH:MM:SS", once anything has arrived
    pub fn last_received_label(&self) -> Option<String> {
        self.log.with(|log| {
            log.last()
                .and_then(Message::received_label)
                .map(|at| format!("Last message {}", at))
        })
    }
}

impl Default for LogFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamObserver for LogFeed {
    fn on_message(&self, message: Message) {
        self.log.update(|log| {
            log.append(message);
        });
    }

    fn on_status(&self, status: LinkStatus) {
        self.status.set(status);
    }
}
