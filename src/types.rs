//! Core types for the network widget.

use crate::error::{ChainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single numeric row-vector flowing through a chain.
pub type Row = Vec<f64>;

/// A batch of rows processed together through a chain.
///
/// Rows may differ in length; the shape transitions per operation kind are
/// documented on [`crate::eval::evaluate`].
pub type Batch = Vec<Row>;

/// Unique identifier for an operation node.
///
/// The prefix encodes the operation kind (`w*`, `sum*`, `b*`, `a*`); see
/// [`NodeKind::from_id`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operation kind of a node, decided once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Scales every element of the batch by the node's operand.
    WeightMultiply,
    /// Collapses all rows into a single row by element-wise addition.
    VectorSum,
    /// Adds the node's operand to every element.
    BiasAdd,
    /// Applies the chain's activation function element-wise.
    Activation,
}

impl NodeKind {
    /// Classify an id by its prefix.
    ///
    /// `sum*` is matched before the single-letter prefixes so that ids like
    /// `sum1` never fall through to another kind. Any other prefix is
    /// rejected here, which is the only place kinds are ever derived from
    /// identifiers.
    pub fn from_id(id: &NodeId) -> Result<Self> {
        let s = id.as_str();
        if s.starts_with("sum") {
            Ok(NodeKind::VectorSum)
        } else if s.starts_with('w') {
            Ok(NodeKind::WeightMultiply)
        } else if s.starts_with('b') {
            Ok(NodeKind::BiasAdd)
        } else if s.starts_with('a') {
            Ok(NodeKind::Activation)
        } else {
            Err(ChainError::UnsupportedNodeKind(id.clone()))
        }
    }
}

/// Display tag consumed by the visualization layer; opaque to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Blue,
    Cyan,
    Orange,
}

/// One typed operation node in a chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationNode {
    pub id: NodeId,

    /// Derived from the id prefix when the node is built, never re-derived
    /// during evaluation.
    pub kind: NodeKind,

    pub enabled: bool,

    /// Operand for weight-multiply and bias-add; `None` for sum and
    /// activation nodes.
    pub value: Option<f64>,

    pub color: NodeColor,
}

impl OperationNode {
    /// Build a node, classifying its kind from the id prefix.
    pub fn new(
        id: impl Into<NodeId>,
        enabled: bool,
        value: Option<f64>,
        color: NodeColor,
    ) -> Result<Self> {
        let id = id.into();
        let kind = NodeKind::from_id(&id)?;
        Ok(Self {
            id,
            kind,
            enabled,
            value,
            color,
        })
    }

    /// Numeric operand, with a missing value counting as zero.
    pub fn operand(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// An ordered sequence of operation nodes forming one signal path.
///
/// Order is significant: evaluation is strictly left-to-right.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    nodes: Vec<OperationNode>,
}

impl Chain {
    pub fn new(nodes: Vec<OperationNode>) -> Self {
        Chain { nodes }
    }

    pub fn nodes(&self) -> &[OperationNode] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [OperationNode] {
        &mut self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of a node within this chain, if present.
    pub fn position_of(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| &n.id == id)
    }

    /// The enabled nodes in path order.
    pub fn enabled_nodes(&self) -> impl Iterator<Item = &OperationNode> {
        self.nodes.iter().filter(|n| n.enabled)
    }

    /// True when the enabled nodes form a contiguous prefix in path order.
    pub fn enabled_is_prefix(&self) -> bool {
        let mut seen_disabled = false;
        for node in &self.nodes {
            if node.enabled && seen_disabled {
                return false;
            }
            if !node.enabled {
                seen_disabled = true;
            }
        }
        true
    }
}

/// The full widget state: every chain of the network.
///
/// Node ids are unique across the whole state, so a node may be looked up
/// without naming its chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    chains: Vec<Chain>,
}

impl NetworkState {
    /// Build a state, rejecting duplicate node ids across chains.
    pub fn new(chains: Vec<Chain>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for chain in &chains {
            for node in chain.nodes() {
                if !seen.insert(node.id.clone()) {
                    return Err(ChainError::DuplicateNodeId(node.id.clone()));
                }
            }
        }
        Ok(NetworkState { chains })
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn chain(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index)
    }

    pub(crate) fn chains_mut(&mut self) -> &mut [Chain] {
        &mut self.chains
    }

    /// Look up a node over the flattened node set.
    pub fn node(&self, id: &NodeId) -> Option<&OperationNode> {
        self.chains
            .iter()
            .flat_map(|c| c.nodes().iter())
            .find(|n| &n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.chains.iter().map(|c| c.len()).sum()
    }
}

/// A discrete user intent applied to the network state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Toggle a node. Enabling also enables everything upstream of it in
    /// its chain; disabling also disables everything downstream.
    Enable { id: NodeId, enabled: bool },

    /// Overwrite a node's operand value. Never changes the enabled set.
    SetValue { id: NodeId, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> OperationNode {
        OperationNode::new(id, true, None, NodeColor::Blue).unwrap()
    }

    #[test]
    fn test_kind_from_id() {
        assert_eq!(
            NodeKind::from_id(&"w1".into()).unwrap(),
            NodeKind::WeightMultiply
        );
        assert_eq!(
            NodeKind::from_id(&"sum3".into()).unwrap(),
            NodeKind::VectorSum
        );
        assert_eq!(NodeKind::from_id(&"b2".into()).unwrap(), NodeKind::BiasAdd);
        assert_eq!(
            NodeKind::from_id(&"af1".into()).unwrap(),
            NodeKind::Activation
        );
    }

    #[test]
    fn test_kind_from_unknown_prefix() {
        let err = NodeKind::from_id(&"x9".into()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ChainError::UnsupportedNodeKind(id) if id.as_str() == "x9"
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let chains = vec![
            Chain::new(vec![node("w1")]),
            Chain::new(vec![node("sum1"), node("w1")]),
        ];
        let err = NetworkState::new(chains).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ChainError::DuplicateNodeId(id) if id.as_str() == "w1"
        ));
    }

    #[test]
    fn test_flattened_lookup() {
        let state = NetworkState::new(vec![
            Chain::new(vec![node("w1"), node("sum1")]),
            Chain::new(vec![node("b2")]),
        ])
        .unwrap();

        assert_eq!(state.node_count(), 3);
        assert!(state.node(&"b2".into()).is_some());
        assert!(state.node(&"nope".into()).is_none());
    }

    #[test]
    fn test_enabled_is_prefix() {
        let mut chain = Chain::new(vec![node("w1"), node("sum1"), node("b1")]);
        assert!(chain.enabled_is_prefix());

        chain.nodes_mut()[2].enabled = false;
        assert!(chain.enabled_is_prefix());

        chain.nodes_mut()[0].enabled = false;
        assert!(!chain.enabled_is_prefix());
    }

    #[test]
    fn test_missing_operand_counts_as_zero() {
        let n = OperationNode::new("b1", true, None, NodeColor::Orange).unwrap();
        assert_eq!(n.operand(), 0.0);
    }
}
