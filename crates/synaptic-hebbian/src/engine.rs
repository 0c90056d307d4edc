use tracing::{debug, warn};

use synaptic_core::config::LearningConfig;
use synaptic_core::errors::GraphError;
use synaptic_core::graph::Graph;
use synaptic_core::models::{ActivatedNode, DeltaKind, WeightDelta};
use synaptic_core::traits::IHebbianLearner;

use crate::plan::{self, HebbianPlan};

/// Hebbian learner over co-activated nodes.
pub struct HebbianLearner {
    config: LearningConfig,
}

impl HebbianLearner {
    pub fn new(config: LearningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    /// Stage learning for `activated` against `graph`.
    pub fn plan(&self, graph: &Graph, activated: &[ActivatedNode]) -> HebbianPlan {
        let plan = plan::plan(graph, activated, &self.config);
        debug!(
            pairs = plan.pairs,
            changes = plan.changes.len(),
            "hebbian plan computed"
        );
        plan
    }

    /// Plan and commit in one call.
    pub fn try_reinforce(
        &self,
        graph: &mut Graph,
        activated: &[ActivatedNode],
    ) -> Result<Vec<WeightDelta>, GraphError> {
        let deltas = self.plan(graph, activated).commit(graph)?;
        let count = |kind: DeltaKind| deltas.iter().filter(|d| d.kind == kind).count();
        debug!(
            reinforced = count(DeltaKind::Reinforced),
            decayed = count(DeltaKind::Decayed),
            created = count(DeltaKind::Created),
            "hebbian plan committed"
        );
        Ok(deltas)
    }
}

impl Default for HebbianLearner {
    fn default() -> Self {
        Self::new(LearningConfig::default())
    }
}

impl IHebbianLearner for HebbianLearner {
    fn reinforce(&self, graph: &mut Graph, activated: &[ActivatedNode]) -> Vec<WeightDelta> {
        // A plan computed from this same graph always matches it.
        self.try_reinforce(graph, activated).unwrap_or_else(|e| {
            warn!(error = %e, "hebbian commit rejected");
            Vec::new()
        })
    }
}
