//! User-facing notifications.
//!
//! The cart reports failures to the shopper as short error messages (the storefront
//! shows them as toasts). The presentation is behind the [`Notifier`] trait;
//! [`TracingNotifier`] writes them to the log and [`RecordingNotifier`] keeps them in
//! memory so tests and embedders can inspect what was shown.

use std::sync::{Arc, Mutex};
use tracing::error;

/// Requested quantity is above the available stock.
pub const STOCK_EXCEEDED: &str = "Quantidade solicitada fora de estoque";
/// Adding a product failed.
pub const ADD_FAILED: &str = "Erro na adição do produto";
/// Removing a product failed.
pub const REMOVE_FAILED: &str = "Erro na remoção do produto";
/// Changing a product amount failed.
pub const UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";

/// An error message shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

/// Emits notifications as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        error!(message = %notification.message, "notification");
    }
}

/// Keeps every notification in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}
