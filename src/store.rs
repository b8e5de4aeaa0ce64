//! Authoritative owner of the network state.

use crate::error::Result;
use crate::reducer;
use crate::subscriptions::{
    SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{Intent, NetworkState};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::debug;

/// The single writer of [`NetworkState`].
///
/// Consumers never hold the state directly; they take [`snapshot`] reads
/// (cheap `Arc` clones) and subscribe for change notifications. A snapshot
/// taken before a dispatch is stale by construction once the next intent
/// has been applied, so consumers should re-read rather than cache.
///
/// [`snapshot`]: NetworkStore::snapshot
pub struct NetworkStore {
    /// Current published snapshot.
    state: RwLock<Arc<NetworkState>>,

    /// Subscription manager.
    subscriptions: SubscriptionManager,

    /// Serializes dispatches so snapshots and events are published in
    /// intent order.
    write_lock: Mutex<()>,
}

impl NetworkStore {
    /// Create a store owning the given initial state.
    pub fn new(state: NetworkState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            subscriptions: SubscriptionManager::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store with the widget's default 3-chain topology.
    pub fn with_defaults() -> Self {
        Self::new(crate::defaults::default_network())
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<NetworkState> {
        Arc::clone(&self.state.read())
    }

    /// Apply an intent and publish the new snapshot.
    ///
    /// Returns the post-transition snapshot. Every live subscriber receives
    /// exactly one `StateChanged` event per dispatch.
    pub fn dispatch(&self, intent: Intent) -> Arc<NetworkState> {
        let _lock = self.write_lock.lock();

        let current = self.snapshot();
        let next = Arc::new(reducer::apply(&current, &intent));

        *self.state.write() = Arc::clone(&next);
        debug!(?intent, "applied intent");

        self.subscriptions.broadcast_state_changed(&intent, &next);

        next
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        self.subscriptions.subscribe(config)
    }

    /// Unsubscribe and clean up.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    /// Number of live subscribers.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }

    /// Export the current snapshot as JSON for the host page.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&*self.snapshot())?)
    }
}
