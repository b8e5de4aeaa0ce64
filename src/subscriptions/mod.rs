//! Subscription system for live state updates.
//!
//! Consumers subscribe to the store and receive a `StateChanged` event for
//! every applied intent, carrying the post-transition snapshot. Buffers are
//! bounded; a subscriber that cannot keep up is dropped rather than letting
//! it stall the dispatcher.
//!
//! # Example
//!
//! ```ignore
//! let store = NetworkStore::with_defaults();
//! let handle = store.subscribe(SubscriptionConfig::default());
//!
//! store.dispatch(Intent::Enable { id: "af1".into(), enabled: false });
//!
//! match handle.recv() {
//!     Ok(NetworkEvent::StateChanged { state, .. }) => redraw(&state),
//!     Ok(NetworkEvent::Dropped { .. }) | Err(_) => (),
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, NetworkEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
};
