//! The graph store: nodes, directed synapses, hyperedges.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, SynapticResult};

use super::category::RelationKind;
use super::hyperedge::Hyperedge;
use super::node::{Node, NodeId};
use super::synapse::Synapse;

/// Associative memory graph owned by a single session.
///
/// Nodes are kept in a `BTreeMap` so every iteration over the graph is
/// ordered by id. The engine never removes nodes or synapses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: BTreeMap<NodeId, Node>,
    #[serde(default)]
    pub synapses: Vec<Synapse>,
    #[serde(default)]
    pub hyperedges: Vec<Hyperedge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph from JSON.
    pub fn from_json(json: &str) -> SynapticResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn synapse_count(&self) -> usize {
        self.synapses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Insert a new node. Fails if the id is taken.
    pub fn insert_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode { id: node.id });
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Insert or replace a node, returning the previous one.
    pub fn upsert_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id.clone(), node)
    }

    /// Add a synapse. Both endpoints must exist and differ.
    pub fn add_synapse(&mut self, synapse: Synapse) -> Result<(), GraphError> {
        if synapse.source == synapse.target {
            return Err(GraphError::SelfLoop { id: synapse.source });
        }
        for endpoint in [&synapse.source, &synapse.target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::MissingEndpoint {
                    missing: endpoint.clone(),
                    source_id: synapse.source.clone(),
                    target_id: synapse.target.clone(),
                });
            }
        }
        self.synapses.push(synapse);
        Ok(())
    }

    /// Create or update the two association synapses between `a` and `b`.
    pub fn associate(&mut self, a: &str, b: &str, weight: f64) -> Result<(), GraphError> {
        for (source, target) in [(a, b), (b, a)] {
            match self.association_mut(source, target) {
                Some(existing) => existing.set_weight(weight),
                None => self.add_synapse(Synapse::new(source, target, weight))?,
            }
        }
        Ok(())
    }

    /// Tag `a` and `b` as semantically opposed with a single contradiction
    /// synapse. Direction does not matter to detection.
    pub fn mark_contradiction(&mut self, a: &str, b: &str, weight: f64) -> Result<(), GraphError> {
        self.add_synapse(Synapse::new(a, b, weight).with_kind(RelationKind::Contradiction))
    }

    /// First synapse of any kind from `source` to `target`.
    pub fn synapse(&self, source: &str, target: &str) -> Option<&Synapse> {
        self.synapses
            .iter()
            .find(|s| s.source == source && s.target == target)
    }

    pub fn synapse_mut(&mut self, source: &str, target: &str) -> Option<&mut Synapse> {
        self.synapses
            .iter_mut()
            .find(|s| s.source == source && s.target == target)
    }

    fn association_mut(&mut self, source: &str, target: &str) -> Option<&mut Synapse> {
        self.synapses.iter_mut().find(|s| {
            s.source == source && s.target == target && !s.kind.is_contradiction()
        })
    }

    /// All synapses joining `a` and `b`, either direction.
    pub fn synapses_between<'a>(
        &'a self,
        a: &'a str,
        b: &'a str,
    ) -> impl Iterator<Item = &'a Synapse> + 'a {
        self.synapses.iter().filter(move |s| s.connects(a, b))
    }

    /// Synapses leaving `id`.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Synapse> + 'a {
        self.synapses.iter().filter(move |s| s.source == id)
    }

    /// Add a hyperedge. Needs at least two distinct members, all present.
    pub fn add_hyperedge(&mut self, hyperedge: Hyperedge) -> Result<(), GraphError> {
        let distinct: BTreeSet<&NodeId> = hyperedge.members.iter().collect();
        if distinct.len() < 2 {
            return Err(GraphError::InvalidHyperedge {
                name: hyperedge.name,
                reason: "needs at least two distinct members".to_string(),
            });
        }
        if let Some(missing) = distinct.iter().find(|id| !self.nodes.contains_key(id.as_str())) {
            return Err(GraphError::InvalidHyperedge {
                reason: format!("member {missing} does not exist"),
                name: hyperedge.name,
            });
        }
        self.hyperedges.push(hyperedge);
        Ok(())
    }

    /// Indices of synapses whose source or target is missing.
    ///
    /// A non-empty result means the graph was corrupted outside the store
    /// API (e.g. hand-edited data).
    pub fn dangling_synapses(&self) -> Vec<usize> {
        self.synapses
            .iter()
            .enumerate()
            .filter(|(_, s)| !self.nodes.contains_key(&s.source) || !self.nodes.contains_key(&s.target))
            .map(|(i, _)| i)
            .collect()
    }

    /// Mean heat over all nodes, 0.0 for an empty graph.
    pub fn mean_heat(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.nodes.values().map(Node::heat).sum::<f64>() / self.nodes.len() as f64
    }
}
