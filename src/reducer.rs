//! Pure state transitions for toggle and value-edit intents.

use crate::types::{Intent, NetworkState};
use tracing::trace;

/// Apply an intent to a state, producing the next state.
///
/// The input state is never mutated, so readers holding an older snapshot
/// keep a consistent view. Intents naming an unknown id are a no-op rather
/// than an error: toggle/edit events can race a host-side reconfiguration,
/// and the store must stay resilient to stale identifiers.
///
/// After every transition, the enabled nodes of each chain form a
/// contiguous prefix in path order:
/// - `Enable { enabled: true }` also enables every node upstream of the
///   target (positions `0..=k`), since enabling a node implies its
///   prerequisites are active.
/// - `Enable { enabled: false }` also disables every node downstream
///   (positions `k..end`), since disabling a node invalidates everything
///   that consumes its output.
/// - `SetValue` never touches the enabled set.
pub fn apply(state: &NetworkState, intent: &Intent) -> NetworkState {
    let mut next = state.clone();

    match intent {
        Intent::Enable { id, enabled } => {
            let target = next
                .chains_mut()
                .iter_mut()
                .find_map(|chain| chain.position_of(id).map(|index| (chain, index)));

            if let Some((chain, index)) = target {
                let range = if *enabled {
                    0..index + 1
                } else {
                    index..chain.len()
                };
                for node in &mut chain.nodes_mut()[range] {
                    node.enabled = *enabled;
                }
                debug_assert!(chain.enabled_is_prefix());
            } else {
                trace!(id = %id, "enable intent for unknown id, ignoring");
            }
        }

        Intent::SetValue { id, value } => {
            let node = next
                .chains_mut()
                .iter_mut()
                .flat_map(|chain| chain.nodes_mut().iter_mut())
                .find(|node| &node.id == id);

            if let Some(node) = node {
                node.value = Some(*value);
            } else {
                trace!(id = %id, "set-value intent for unknown id, ignoring");
            }
        }
    }

    next
}
