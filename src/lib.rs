//! # Neurochain
//!
//! The computation and state core of an interactive teaching widget that
//! visualizes how a small feed-forward network computes its output.
//!
//! ## Core Concepts
//!
//! - **Chains**: ordered sequences of typed operation nodes (weight-multiply,
//!   vector-sum, bias-add, activation) forming one signal path each
//! - **Evaluation**: pure left-to-right forward evaluation of a chain over a
//!   batch of numeric rows
//! - **Intents**: toggle and value-edit actions reduced into new states,
//!   keeping each chain's enabled nodes a contiguous prefix
//! - **Store**: single authoritative owner of the state, publishing
//!   snapshots and change events to subscribers
//!
//! ## Example
//!
//! ```
//! use neurochain::{
//!     evaluate_network, ActivationKind, Intent, NetworkStore, SampleDomain,
//!     SubscriptionConfig,
//! };
//!
//! let store = NetworkStore::with_defaults();
//! let handle = store.subscribe(SubscriptionConfig::default());
//!
//! // A checkbox toggle in the UI becomes an intent.
//! let state = store.dispatch(Intent::Enable { id: "af1".into(), enabled: false });
//! assert!(handle.try_recv().is_ok());
//!
//! // Recompute the plotted curves from the new snapshot.
//! let inputs = SampleDomain::default().values();
//! let curves = evaluate_network(&inputs, &state, ActivationKind::Softplus);
//! assert_eq!(curves.hidden.len(), 2);
//! ```

pub mod activation;
pub mod defaults;
pub mod error;
pub mod eval;
pub mod reducer;
pub mod sampling;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use activation::ActivationKind;
pub use defaults::default_network;
pub use error::{ChainError, Result};
pub use eval::{evaluate, evaluate_network, NetworkCurves};
pub use reducer::apply;
pub use sampling::SampleDomain;
pub use store::NetworkStore;
pub use subscriptions::{
    DropReason, NetworkEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
    SubscriptionManager,
};
pub use types::*;
