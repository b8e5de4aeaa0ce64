//! The widget's fixed default topology.
//!
//! Three chains, thirteen nodes: two hidden-layer chains transform the raw
//! input and feed the output chain. Weights and biases are the constants
//! the course page ships with; users edit them live but nothing is
//! persisted across sessions.

use crate::types::{Chain, NetworkState, NodeColor, OperationNode};

fn node(id: &str, value: Option<f64>, color: NodeColor) -> OperationNode {
    OperationNode::new(id, true, value, color).expect("default node id is valid")
}

/// The default network: all nodes enabled, original weights and biases.
pub fn default_network() -> NetworkState {
    let blue = Chain::new(vec![
        node("w1", Some(-34.4), NodeColor::Blue),
        node("sum1", None, NodeColor::Blue),
        node("b1", Some(2.14), NodeColor::Blue),
        node("af1", None, NodeColor::Blue),
        node("w3", Some(-1.3), NodeColor::Blue),
    ]);

    let cyan = Chain::new(vec![
        node("w2", Some(-2.52), NodeColor::Cyan),
        node("sum2", None, NodeColor::Cyan),
        node("b2", Some(1.29), NodeColor::Cyan),
        node("af2", None, NodeColor::Cyan),
        node("w4", Some(2.28), NodeColor::Cyan),
    ]);

    let orange = Chain::new(vec![
        node("sum3", None, NodeColor::Orange),
        node("b3", Some(-0.58), NodeColor::Orange),
        node("af3", None, NodeColor::Orange),
    ]);

    NetworkState::new(vec![blue, cyan, orange]).expect("default node ids are unique")
}
