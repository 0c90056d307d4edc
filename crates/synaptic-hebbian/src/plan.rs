use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use synaptic_core::config::LearningConfig;
use synaptic_core::errors::GraphError;
use synaptic_core::graph::{Graph, Synapse};
use synaptic_core::models::{ActivatedNode, DeltaKind, WeightDelta};

use crate::rule;

/// One staged synapse change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlannedChange {
    /// Update the synapse at `index` in the store's synapse list.
    Update {
        index: usize,
        source: String,
        target: String,
        before: f64,
        after: f64,
        kind: DeltaKind,
    },
    /// Create a new association synapse.
    Create {
        source: String,
        target: String,
        weight: f64,
    },
}

/// Learning computed against one graph snapshot, not yet applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HebbianPlan {
    pub changes: Vec<PlannedChange>,
    /// Unordered pairs considered.
    pub pairs: usize,
}

impl HebbianPlan {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Deltas this plan would apply.
    pub fn deltas(&self) -> Vec<WeightDelta> {
        self.changes
            .iter()
            .map(|change| match change {
                PlannedChange::Update {
                    source,
                    target,
                    before,
                    after,
                    kind,
                    ..
                } => WeightDelta {
                    source: source.clone(),
                    target: target.clone(),
                    before: *before,
                    after: *after,
                    kind: *kind,
                },
                PlannedChange::Create {
                    source,
                    target,
                    weight,
                } => WeightDelta {
                    source: source.clone(),
                    target: target.clone(),
                    before: 0.0,
                    after: *weight,
                    kind: DeltaKind::Created,
                },
            })
            .collect()
    }

    /// Apply the plan to the graph it was computed from.
    ///
    /// Fails without touching anything if an update no longer matches the
    /// synapse at its index or a created link has a missing endpoint.
    pub fn commit(self, graph: &mut Graph) -> Result<Vec<WeightDelta>, GraphError> {
        self.check(graph)?;
        let deltas = self.deltas();
        for change in self.changes {
            match change {
                PlannedChange::Update {
                    index, after, kind, ..
                } => {
                    if let Some(synapse) = graph.synapses.get_mut(index) {
                        synapse.set_weight(after);
                        if kind == DeltaKind::Reinforced {
                            synapse.co_activations = synapse.co_activations.saturating_add(1);
                        }
                    }
                }
                PlannedChange::Create {
                    source,
                    target,
                    weight,
                } => {
                    let mut synapse = Synapse::new(source, target, weight);
                    synapse.co_activations = 1;
                    graph.add_synapse(synapse)?;
                }
            }
        }
        Ok(deltas)
    }

    fn check(&self, graph: &Graph) -> Result<(), GraphError> {
        for change in &self.changes {
            match change {
                PlannedChange::Update {
                    index,
                    source,
                    target,
                    ..
                } => match graph.synapses.get(*index) {
                    Some(s) if &s.source == source && &s.target == target => {}
                    _ => {
                        return Err(GraphError::StaleSynapse {
                            source_id: source.clone(),
                            target_id: target.clone(),
                        })
                    }
                },
                PlannedChange::Create { source, target, .. } => {
                    for id in [source, target] {
                        if !graph.contains(id) {
                            return Err(GraphError::MissingEndpoint {
                                source_id: source.clone(),
                                target_id: target.clone(),
                                missing: id.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Compute the learning for `activated` without mutating `graph`.
///
/// Repeated ids collapse to their highest energy. Pairs are visited in id
/// order, so the plan is deterministic.
pub fn plan(graph: &Graph, activated: &[ActivatedNode], config: &LearningConfig) -> HebbianPlan {
    if !config.enabled {
        return HebbianPlan::default();
    }

    let mut energies: BTreeMap<&str, f64> = BTreeMap::new();
    for node in activated {
        let entry = energies.entry(node.node_id.as_str()).or_insert(node.energy);
        *entry = entry.max(node.energy);
    }
    let nodes: Vec<(&str, f64)> = energies.into_iter().collect();

    // Unordered pair → (association synapse indices, has any synapse).
    let mut links: HashMap<(&str, &str), (Vec<usize>, bool)> = HashMap::new();
    for (index, synapse) in graph.synapses.iter().enumerate() {
        let key = ordered(&synapse.source, &synapse.target);
        let entry = links.entry(key).or_default();
        entry.1 = true;
        if !synapse.kind.is_contradiction() {
            entry.0.push(index);
        }
    }

    let mut plan = HebbianPlan::default();
    for (i, &(a, energy_a)) in nodes.iter().enumerate() {
        for &(b, energy_b) in &nodes[i + 1..] {
            plan.pairs += 1;
            let joint = energy_a * energy_b;
            let meaningful = joint > config.co_firing_floor;

            match links.get(&(a, b)) {
                Some((indices, _)) if !indices.is_empty() => {
                    for &index in indices {
                        let synapse = &graph.synapses[index];
                        let before = synapse.weight();
                        let (after, kind) = if meaningful {
                            (rule::reinforce(before, config.eta, joint), DeltaKind::Reinforced)
                        } else {
                            (rule::decay(before, config.eta_decay), DeltaKind::Decayed)
                        };
                        plan.changes.push(PlannedChange::Update {
                            index,
                            source: synapse.source.clone(),
                            target: synapse.target.clone(),
                            before,
                            after,
                            kind,
                        });
                    }
                }
                // Only a contradiction joins them: do not associate.
                Some(_) => {}
                None => {
                    let weight = rule::seed_weight(config.eta, joint);
                    for (source, target) in [(a, b), (b, a)] {
                        plan.changes.push(PlannedChange::Create {
                            source: source.to_string(),
                            target: target.to_string(),
                            weight,
                        });
                    }
                }
            }
        }
    }
    plan
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
