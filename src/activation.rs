//! Scalar activation functions applied element-wise by activation nodes.

use serde::{Deserialize, Serialize};

/// Named scalar nonlinearity.
///
/// Resolution from a name never fails: anything unrecognized falls back to
/// `Identity`, so a stale activation name from the host page degrades to a
/// pass-through rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    #[default]
    Identity,
    Relu,
    Softplus,
}

impl ActivationKind {
    /// Resolve an activation by name, defaulting to `Identity`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "relu" => ActivationKind::Relu,
            "softplus" => ActivationKind::Softplus,
            _ => ActivationKind::Identity,
        }
    }

    /// Element-wise activation.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            ActivationKind::Identity => x,
            ActivationKind::Relu => x.max(0.0),
            ActivationKind::Softplus => x.exp().ln_1p(),
        }
    }
}
