use std::collections::BTreeMap;

use tracing::debug;

use synaptic_core::config::ContradictionConfig;
use synaptic_core::graph::Graph;
use synaptic_core::models::{ActivatedNode, ContradictionRecord, ContradictionSource};
use synaptic_core::traits::IContradictionDetector;

use crate::detection::{self, explicit::ExplicitRelations};

/// Pairwise contradiction detector over the active set.
pub struct ContradictionDetector {
    config: ContradictionConfig,
}

impl ContradictionDetector {
    pub fn new(config: ContradictionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContradictionConfig {
        &self.config
    }
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new(ContradictionConfig::default())
    }
}

impl IContradictionDetector for ContradictionDetector {
    fn detect(&self, graph: &Graph, activated: &[ActivatedNode]) -> Vec<ContradictionRecord> {
        let records = detect(graph, activated, &self.config);
        debug!(
            candidates = activated.len(),
            contradictions = records.len(),
            "contradiction scan complete"
        );
        records
    }
}

/// Scan every pair of nodes active above the floor.
///
/// Explicit relations come first, then the rest by combined energy; ties
/// fall back to the pair's ids so the order is deterministic.
pub fn detect(
    graph: &Graph,
    activated: &[ActivatedNode],
    config: &ContradictionConfig,
) -> Vec<ContradictionRecord> {
    let mut active: BTreeMap<&str, f64> = BTreeMap::new();
    for node in activated.iter().filter(|n| n.energy > config.activity_floor) {
        let entry = active.entry(node.node_id.as_str()).or_insert(node.energy);
        *entry = entry.max(node.energy);
    }
    let active: Vec<(&str, f64)> = active.into_iter().collect();
    let explicit = ExplicitRelations::from_graph(graph);

    let mut records = Vec::new();
    for (i, &(a, energy_a)) in active.iter().enumerate() {
        for &(b, energy_b) in &active[i + 1..] {
            let combined_energy = energy_a + energy_b;
            let found = if explicit.contains(a, b) {
                Some((
                    ContradictionSource::ExplicitRelation,
                    format!("{} and {} are marked as contradicting", label(graph, a), label(graph, b)),
                ))
            } else if config.text_heuristics {
                match (graph.node(a), graph.node(b)) {
                    (Some(x), Some(y)) => {
                        detection::detect_textual(x, y, config.topic_overlap_threshold)
                    }
                    _ => None,
                }
            } else {
                None
            };

            if let Some((source, description)) = found {
                records.push(ContradictionRecord {
                    node_a: a.to_string(),
                    node_b: b.to_string(),
                    description,
                    source,
                    combined_energy,
                });
            }
        }
    }

    records.sort_by(|x, y| {
        let explicit_x = x.source == ContradictionSource::ExplicitRelation;
        let explicit_y = y.source == ContradictionSource::ExplicitRelation;
        explicit_y
            .cmp(&explicit_x)
            .then_with(|| {
                y.combined_energy
                    .partial_cmp(&x.combined_energy)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| (&x.node_a, &x.node_b).cmp(&(&y.node_a, &y.node_b)))
    });
    records
}

fn label<'g>(graph: &'g Graph, id: &'g str) -> &'g str {
    graph.node(id).map_or(id, |n| n.label.as_str())
}
