//! Forward evaluation of chains over batches.
//!
//! Evaluation is deterministic and side-effect free: the same chain, inputs
//! and activation always produce the same output, and no stage ever mutates
//! its input batch.
//!
//! Shape transitions per operation kind:
//! - weight-multiply: N rows in, N rows out (every element scaled).
//! - vector-sum: N rows in, 1 row out (structurally empty rows are dropped
//!   first; if nothing remains the result is an empty batch).
//! - bias-add: N rows in, N rows out.
//! - activation: N rows in, N rows out.

use crate::activation::ActivationKind;
use crate::types::{Batch, Chain, NetworkState, NodeKind, Row};
use serde::{Deserialize, Serialize};

/// Evaluate one chain over a batch of input rows.
///
/// Only enabled nodes participate, in path order. A chain with no enabled
/// nodes is an identity pass-through: the input batch is returned unchanged.
pub fn evaluate(inputs: &[Row], chain: &Chain, activation: ActivationKind) -> Batch {
    let mut batch = inputs.to_vec();
    for node in chain.enabled_nodes() {
        batch = match node.kind {
            NodeKind::WeightMultiply => weight_forward(&batch, node.operand()),
            NodeKind::VectorSum => sum_forward(&batch),
            NodeKind::BiasAdd => bias_forward(&batch, node.operand()),
            NodeKind::Activation => activation_forward(&batch, activation),
        };
    }
    batch
}

/// Scale every element of every row by `weight`.
fn weight_forward(inputs: &[Row], weight: f64) -> Batch {
    inputs
        .iter()
        .map(|row| row.iter().map(|x| x * weight).collect())
        .collect()
}

/// Collapse all rows into a single row by element-wise addition.
///
/// Structurally empty rows are excluded first. If no rows remain the result
/// is an empty batch. Rows of unequal length contribute zero past their
/// end, so the collapsed row spans the longest remaining row.
fn sum_forward(inputs: &[Row]) -> Batch {
    let rows: Vec<&Row> = inputs.iter().filter(|row| !row.is_empty()).collect();
    let Some(len) = rows.iter().map(|row| row.len()).max() else {
        return Vec::new();
    };

    let mut acc = vec![0.0; len];
    for row in rows {
        for (i, x) in row.iter().enumerate() {
            acc[i] += x;
        }
    }
    vec![acc]
}

/// Add `bias` to every element of every row.
fn bias_forward(inputs: &[Row], bias: f64) -> Batch {
    inputs
        .iter()
        .map(|row| row.iter().map(|x| x + bias).collect())
        .collect()
}

/// Apply the activation element-wise to every row.
fn activation_forward(inputs: &[Row], activation: ActivationKind) -> Batch {
    inputs
        .iter()
        .map(|row| row.iter().map(|x| activation.apply(*x)).collect())
        .collect()
}

/// Curves produced by evaluating the whole network over one input row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkCurves {
    /// One curve per hidden chain, in chain order.
    pub hidden: Vec<Row>,

    /// The output chain's curve.
    pub output: Row,
}

/// Evaluate every chain of the network over one input row.
///
/// All chains except the last are hidden chains fed directly with `inputs`;
/// the last chain is the output chain, fed with the hidden chains' output
/// rows. This is the wiring the widget's chart performs for each redraw.
pub fn evaluate_network(
    inputs: &[f64],
    state: &NetworkState,
    activation: ActivationKind,
) -> NetworkCurves {
    let Some((output_chain, hidden_chains)) = state.chains().split_last() else {
        return NetworkCurves {
            hidden: Vec::new(),
            output: inputs.to_vec(),
        };
    };

    let hidden: Vec<Row> = hidden_chains
        .iter()
        .map(|chain| {
            evaluate(&[inputs.to_vec()], chain, activation)
                .into_iter()
                .next()
                .unwrap_or_default()
        })
        .collect();

    let feed: Batch = if hidden.is_empty() {
        vec![inputs.to_vec()]
    } else {
        hidden.clone()
    };

    let output = evaluate(&feed, output_chain, activation)
        .into_iter()
        .next()
        .unwrap_or_default();

    NetworkCurves { hidden, output }
}
