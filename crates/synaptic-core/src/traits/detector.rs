use crate::graph::Graph;
use crate::models::{ActivatedNode, ContradictionRecord};

/// Flags pairs of simultaneously active, opposed nodes.
pub trait IContradictionDetector: Send + Sync {
    /// At most one record per pair, highest priority first.
    fn detect(&self, graph: &Graph, activated: &[ActivatedNode]) -> Vec<ContradictionRecord>;
}
