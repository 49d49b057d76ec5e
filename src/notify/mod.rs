//! Change notification
//!
//! An explicit observer list for selector mutations. Subscribers run
//! synchronously, in registration order, within the mutating call itself.
//! A failing subscriber is logged and skipped; it never aborts the other
//! subscribers or the mutation that triggered the notification.

use std::fmt;

use anyhow::Result;

use crate::selector::LabelSelector;

/// Handle returned by `subscribe`, used to unsubscribe later
///
/// Keeping the handle is how a UI context avoids leaking its subscription
/// when it is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type ChangeCallback = Box<dyn FnMut(&LabelSelector) -> Result<()>>;

/// Observer list fired after every selector mutation
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, ChangeCallback)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, returning a handle for later unsubscription
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LabelSelector) -> Result<()> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback
    ///
    /// Returns whether a subscription was actually removed; unsubscribing
    /// twice is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < before
    }

    /// Invoke every subscriber with the current selector
    ///
    /// Runs synchronously in registration order. A subscriber returning an
    /// error is reported and the remaining subscribers still run.
    pub fn fire(&mut self, selector: &LabelSelector) {
        for (id, callback) in &mut self.subscribers {
            if let Err(err) = callback(selector) {
                tracing::warn!(
                    subscription = %id,
                    error = %err,
                    "Change subscriber failed; continuing with remaining subscribers"
                );
            }
        }
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
