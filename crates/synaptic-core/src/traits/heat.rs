use crate::graph::Graph;

/// Per-node heat maintenance between pulses.
pub trait IHeatManager: Send + Sync {
    /// Decay every node's heat once. Returns the number of nodes whose heat
    /// changed.
    fn diffuse(&self, graph: &mut Graph) -> usize;
}
