use crate::graph::Graph;
use crate::models::{ActivatedNode, WeightDelta};

/// Co-activation driven synapse learning.
pub trait IHebbianLearner: Send + Sync {
    /// Reinforce or decay links between co-activated nodes and return the
    /// applied deltas. A disabled learner returns no deltas and mutates
    /// nothing.
    fn reinforce(&self, graph: &mut Graph, activated: &[ActivatedNode]) -> Vec<WeightDelta>;
}
