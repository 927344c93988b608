//! # Action Dispatch
//!
//! Activation side effects that are not navigation. Screens produce an
//! [`Action`]; the app hands it to whichever [`ActionDispatcher`] it was built
//! with. The default [`LogDispatcher`] only records a structured log event,
//! which stands in for the playback and ordering back ends this app does not
//! have.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Side effect requested by activating a focused element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PlayChannel {
        category: &'static str,
        channel: &'static str,
    },
    PlayMovie {
        title: &'static str,
    },
    Order {
        category: &'static str,
        item: &'static str,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayChannel { channel, .. } => write!(f, "Playing: {channel}"),
            Action::PlayMovie { title } => write!(f, "Playing: {title}"),
            Action::Order { item, .. } => write!(f, "Ordering: {item}"),
        }
    }
}

/// Sink for activation side effects.
pub trait ActionDispatcher {
    fn dispatch(&mut self, action: &Action);
}

/// Dispatcher that logs each action through `tracing`.
#[derive(Debug, Default)]
pub struct LogDispatcher;

impl ActionDispatcher for LogDispatcher {
    fn dispatch(&mut self, action: &Action) {
        match action {
            Action::PlayChannel { category, channel } => {
                tracing::info!(category, channel, "{action}");
            }
            Action::PlayMovie { title } => {
                tracing::info!(title, "{action}");
            }
            Action::Order { category, item } => {
                tracing::info!(category, item, "{action}");
            }
        }
    }
}

/// Dispatcher that keeps every action it receives, in order.
///
/// Clones share one log, so a caller can keep a clone after moving the
/// dispatcher into an app.
#[derive(Debug, Default, Clone)]
pub struct RecordingDispatcher {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl RecordingDispatcher {
    /// Snapshot of the recorded actions.
    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, action: &Action) {
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(action.clone());
        }
    }
}
