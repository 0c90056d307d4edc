use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::scalar::Weight;

/// A named cluster of two or more nodes that energy can flow through as a
/// group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperedge {
    pub name: String,
    pub members: Vec<NodeId>,
    /// Aggregate strength of the cluster.
    pub weight: Weight,
    /// How prominent the cluster is, 0.0–1.0.
    pub salience: Weight,
}

impl Hyperedge {
    pub fn new(name: impl Into<String>, members: Vec<NodeId>, weight: f64, salience: f64) -> Self {
        Self {
            name: name.into(),
            members,
            weight: Weight::new(weight),
            salience: Weight::new(salience),
        }
    }

    /// Weight of the virtual member→member edges this cluster contributes.
    pub fn flow_weight(&self) -> f64 {
        self.weight.value() * self.salience.value()
    }
}
