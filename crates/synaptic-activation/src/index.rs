//! Traversal index over the graph store.
//!
//! Mirrors the store into a petgraph `DiGraph` once per pulse. Node indices
//! follow the store's id order, so sorting by `NodeIndex` is sorting by id.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use synaptic_core::graph::Graph;
use synaptic_core::traits::{AuditEvent, IAuditSink};

/// Read-only adjacency view used by one activation pass.
pub struct ActivationIndex<'g> {
    graph: DiGraph<&'g str, f64>,
    indices: HashMap<&'g str, NodeIndex>,
}

impl<'g> ActivationIndex<'g> {
    /// Build the index. Synapses with a missing endpoint are skipped and
    /// reported to `audit`. With `hyperedge_flow`, every hyperedge adds
    /// member→member edges weighted `weight · salience`.
    pub fn build(graph: &'g Graph, hyperedge_flow: bool, audit: &dyn IAuditSink) -> Self {
        let mut digraph = DiGraph::with_capacity(graph.node_count(), graph.synapse_count());
        let mut indices = HashMap::with_capacity(graph.node_count());
        for id in graph.nodes.keys() {
            let idx = digraph.add_node(id.as_str());
            indices.insert(id.as_str(), idx);
        }

        for synapse in &graph.synapses {
            match (
                indices.get(synapse.source.as_str()),
                indices.get(synapse.target.as_str()),
            ) {
                (Some(&s), Some(&t)) if s != t => {
                    digraph.add_edge(s, t, synapse.weight());
                }
                (Some(_), Some(_)) => {}
                (source, _) => {
                    let missing = if source.is_none() {
                        &synapse.source
                    } else {
                        &synapse.target
                    };
                    audit.record(AuditEvent::DanglingSynapse {
                        source: synapse.source.clone(),
                        target: synapse.target.clone(),
                        missing: missing.clone(),
                    });
                }
            }
        }

        if hyperedge_flow {
            for hyperedge in &graph.hyperedges {
                let weight = hyperedge.flow_weight();
                let members: Vec<NodeIndex> = hyperedge
                    .members
                    .iter()
                    .filter_map(|id| indices.get(id.as_str()).copied())
                    .collect();
                for &a in &members {
                    for &b in &members {
                        if a != b {
                            digraph.add_edge(a, b, weight);
                        }
                    }
                }
            }
        }

        Self {
            graph: digraph,
            indices,
        }
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    pub fn id(&self, idx: NodeIndex) -> &'g str {
        self.graph[idx]
    }

    /// Outgoing neighbors ordered by id. Parallel edges collapse to the
    /// strongest one.
    pub fn outgoing(&self, idx: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut strongest: BTreeMap<NodeIndex, f64> = BTreeMap::new();
        for edge in self.graph.edges(idx) {
            let w = *edge.weight();
            strongest
                .entry(edge.target())
                .and_modify(|cur| *cur = cur.max(w))
                .or_insert(w);
        }
        strongest.into_iter().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
