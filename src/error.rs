//! Error types for the chain engine.

use crate::types::NodeId;
use thiserror::Error;

/// Main error type for chain construction and snapshot export.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The id prefix does not name a known operation kind.
    ///
    /// Raised once, when a node is constructed; a `NetworkState` that was
    /// built successfully can never hit this during evaluation.
    #[error("Unsupported node kind for id: {0}")]
    UnsupportedNodeKind(NodeId),

    /// A node id appears more than once across the whole network.
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(NodeId),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChainError {
    fn from(e: serde_json::Error) -> Self {
        ChainError::Serialization(e.to_string())
    }
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
