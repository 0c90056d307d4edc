use serde::{Deserialize, Serialize};

use super::category::RelationKind;
use super::node::NodeId;
use super::scalar::Weight;

/// A directed weighted edge between two nodes.
///
/// A two-way association is two `Synapse` records, one per direction, so
/// each direction can be tuned independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synapse {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
    /// Number of reinforcement events this edge has seen.
    #[serde(default)]
    pub co_activations: u32,
    #[serde(default)]
    pub kind: RelationKind,
}

impl Synapse {
    /// Create an association synapse with zero co-activations.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: Weight::new(weight),
            co_activations: 0,
            kind: RelationKind::Association,
        }
    }

    /// Builder: set the relation kind.
    pub fn with_kind(mut self, kind: RelationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn weight(&self) -> f64 {
        self.weight.value()
    }

    /// Set weight, clamping to [0.0, 1.0].
    pub fn set_weight(&mut self, value: f64) {
        self.weight = Weight::new(value);
    }

    /// Whether this synapse joins `a` and `b` in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
