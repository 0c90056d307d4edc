use std::collections::BTreeSet;
use std::sync::Arc;

use petgraph::graph::NodeIndex;
use tracing::debug;

use synaptic_core::config::ActivationConfig;
use synaptic_core::constants::SEED_ENERGY;
use synaptic_core::graph::{Graph, NodeId};
use synaptic_core::models::ActivatedNode;
use synaptic_core::traits::{IActivationEngine, IAuditSink, TracingAuditSink};

use crate::index::ActivationIndex;
use crate::propagation::bias;
use crate::spread::{spread, Reached};

/// Spreading-activation engine.
///
/// Pipeline: seed filtering → bounded spread → heat bias → energy budget →
/// deterministic ordering.
pub struct ActivationEngine {
    config: ActivationConfig,
    audit: Arc<dyn IAuditSink>,
}

impl ActivationEngine {
    /// Create an engine that reports data-integrity problems via `tracing`.
    pub fn new(config: ActivationConfig) -> Self {
        Self {
            config,
            audit: Arc::new(TracingAuditSink),
        }
    }

    /// Route audit events to the caller's channel.
    pub fn with_audit(mut self, audit: Arc<dyn IAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    pub fn config(&self) -> &ActivationConfig {
        &self.config
    }
}

impl Default for ActivationEngine {
    fn default() -> Self {
        Self::new(ActivationConfig::default())
    }
}

impl IActivationEngine for ActivationEngine {
    fn activate(&self, graph: &Graph, seeds: &[NodeId]) -> Vec<ActivatedNode> {
        activate(graph, seeds, &self.config, self.audit.as_ref())
    }
}

/// Activate `graph` from `seeds` with the given parameters.
///
/// Seeds that are unknown or archived are dropped silently. With spreading
/// disabled the valid seeds come back alone at depth 0 and energy 1.0.
pub fn activate(
    graph: &Graph,
    seeds: &[NodeId],
    params: &ActivationConfig,
    audit: &dyn IAuditSink,
) -> Vec<ActivatedNode> {
    let valid: BTreeSet<&str> = seeds
        .iter()
        .map(String::as_str)
        .filter(|id| graph.node(id).is_some_and(|n| !n.archived))
        .collect();

    if valid.is_empty() {
        debug!(requested = seeds.len(), "no valid seeds, nothing activated");
        return Vec::new();
    }

    if !params.enabled {
        let mut activated: Vec<ActivatedNode> = valid
            .iter()
            .map(|id| seed_only(graph, id, params.heat_bias))
            .collect();
        sort_activated(&mut activated);
        debug!(seeds = activated.len(), "spreading disabled, returning seeds");
        return activated;
    }

    let index = ActivationIndex::build(graph, params.hyperedge_flow, audit);
    let seed_indices: Vec<NodeIndex> = valid
        .iter()
        .filter_map(|id| index.node_index(id))
        .collect();

    let reached = spread(
        &index,
        &seed_indices,
        params.gamma,
        params.theta,
        params.max_depth,
    );

    let mut activated: Vec<ActivatedNode> = reached
        .into_iter()
        .map(|(idx, r)| to_activated(graph, &index, idx, r, params.heat_bias))
        .collect();

    let scale = apply_budget(&mut activated, params.energy_budget);
    sort_activated(&mut activated);

    debug!(
        seeds = seed_indices.len(),
        edges = index.edge_count(),
        activated = activated.len(),
        budget_scale = scale,
        "activation complete"
    );
    activated
}

fn seed_only(graph: &Graph, id: &str, heat_bias: f64) -> ActivatedNode {
    let heat = graph.node(id).map_or(0.0, |n| n.heat());
    ActivatedNode {
        node_id: id.to_string(),
        energy: SEED_ENERGY,
        heat,
        biased_energy: bias(SEED_ENERGY, heat, heat_bias),
        depth: 0,
        path: vec![id.to_string()],
    }
}

fn to_activated(
    graph: &Graph,
    index: &ActivationIndex<'_>,
    idx: NodeIndex,
    reached: Reached,
    heat_bias: f64,
) -> ActivatedNode {
    let id = index.id(idx);
    let heat = graph.node(id).map_or(0.0, |n| n.heat());
    ActivatedNode {
        node_id: id.to_string(),
        energy: reached.energy,
        heat,
        biased_energy: bias(reached.energy, heat, heat_bias),
        depth: reached.depth,
        path: reached.path.iter().map(|&i| index.id(i).to_string()).collect(),
    }
}

/// Uniformly rescale energies so Σ biased energy fits the budget.
/// Returns the scale factor applied (1.0 when within budget).
pub fn apply_budget(activated: &mut [ActivatedNode], budget: f64) -> f64 {
    let total: f64 = activated.iter().map(|n| n.biased_energy).sum();
    if total <= budget || total <= 0.0 {
        return 1.0;
    }
    let scale = budget / total;
    for node in activated.iter_mut() {
        node.energy *= scale;
        node.biased_energy *= scale;
    }
    scale
}

/// Biased energy descending, then shallower depth, then id.
pub fn sort_activated(activated: &mut [ActivatedNode]) {
    activated.sort_by(|a, b| {
        b.biased_energy
            .partial_cmp(&a.biased_energy)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.depth.cmp(&b.depth))
            .then_with(|| a.node_id.cmp(&b.node_id))
    });
}
