//! Subscription manager for broadcasting state changes.

use crate::types::{Intent, NetworkState};
use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::types::{
    DropReason, NetworkEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
};

/// Internal subscription state.
struct Subscription {
    sender: Sender<NetworkEvent>,
}

impl Subscription {
    /// Try to send an event. Returns false if the buffer is full or the
    /// receiver is gone (subscriber will be dropped).
    fn try_send(&self, event: NetworkEvent) -> bool {
        self.sender.try_send(event).is_ok()
    }
}

/// Manages subscriptions and broadcasts state-change events.
pub struct SubscriptionManager {
    /// Active subscriptions by ID.
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a new subscription.
    ///
    /// Returns a handle for receiving events. Every applied intent is
    /// delivered as a `StateChanged` event from this point on.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(config.buffer_size);

        self.subscriptions.write().insert(id, Subscription { sender });

        SubscriptionHandle { id, receiver }
    }

    /// Unsubscribe and clean up.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.subscriptions.write();
        if let Some(sub) = subs.remove(&id) {
            // Send dropped event (best effort)
            let _ = sub.try_send(NetworkEvent::Dropped {
                reason: DropReason::Unsubscribed,
            });
        }
    }

    /// Get subscription count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Broadcast a state change to every subscriber.
    ///
    /// Subscribers whose buffers are full are dropped.
    pub fn broadcast_state_changed(&self, intent: &Intent, state: &NetworkState) {
        let event = NetworkEvent::StateChanged {
            intent: intent.clone(),
            state: state.clone(),
        };

        let mut to_remove = Vec::new();

        {
            let subs = self.subscriptions.read();
            for (id, sub) in subs.iter() {
                if !sub.try_send(event.clone()) {
                    to_remove.push(*id);
                }
            }
        }

        if !to_remove.is_empty() {
            let mut subs = self.subscriptions.write();
            for id in to_remove {
                if let Some(sub) = subs.remove(&id) {
                    debug!(id = id.0, "dropping slow subscriber");
                    // Try to notify about the drop (might fail, that's ok)
                    let _ = sub.try_send(NetworkEvent::Dropped {
                        reason: DropReason::BufferOverflow,
                    });
                }
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_network;
    use std::time::Duration;

    fn toggle(id: &str, enabled: bool) -> Intent {
        Intent::Enable {
            id: id.into(),
            enabled,
        }
    }

    #[test]
    fn test_subscribe_unsubscribe() {
        let manager = SubscriptionManager::new();

        let handle = manager.subscribe(SubscriptionConfig::default());
        assert_eq!(manager.subscription_count(), 1);

        manager.unsubscribe(handle.id);
        assert_eq!(manager.subscription_count(), 0);

        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        assert!(matches!(
            event,
            NetworkEvent::Dropped {
                reason: DropReason::Unsubscribed
            }
        ));
    }

    #[test]
    fn test_broadcast_reaches_every_subscriber() {
        let manager = SubscriptionManager::new();
        let a = manager.subscribe(SubscriptionConfig::default());
        let b = manager.subscribe(SubscriptionConfig::default());

        let state = default_network();
        manager.broadcast_state_changed(&toggle("af1", false), &state);

        for handle in [&a, &b] {
            let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
            match event {
                NetworkEvent::StateChanged { intent, state } => {
                    assert_eq!(intent, toggle("af1", false));
                    assert_eq!(state.node_count(), 13);
                }
                _ => panic!("expected StateChanged, got {:?}", event),
            }
        }
    }

    #[test]
    fn test_drop_slow_subscriber() {
        let manager = SubscriptionManager::new();
        let _handle = manager.subscribe(SubscriptionConfig { buffer_size: 2 });

        let state = default_network();
        for _ in 0..10 {
            manager.broadcast_state_changed(&toggle("b1", true), &state);
        }

        assert_eq!(manager.subscription_count(), 0);
    }
}
