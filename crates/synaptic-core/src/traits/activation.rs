use crate::graph::{Graph, NodeId};
use crate::models::ActivatedNode;

/// Spreading activation from seed nodes.
pub trait IActivationEngine: Send + Sync {
    /// Activate the graph from `seeds`. Unknown or archived seeds are
    /// dropped; no valid seeds yields an empty list.
    fn activate(&self, graph: &Graph, seeds: &[NodeId]) -> Vec<ActivatedNode>;
}
