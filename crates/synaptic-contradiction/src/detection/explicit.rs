//! Contradiction synapses recorded in the graph.

use std::collections::HashSet;

use synaptic_core::graph::Graph;

/// Unordered pairs joined by a contradiction synapse in either direction.
pub struct ExplicitRelations<'g> {
    pairs: HashSet<(&'g str, &'g str)>,
}

impl<'g> ExplicitRelations<'g> {
    pub fn from_graph(graph: &'g Graph) -> Self {
        let pairs = graph
            .synapses
            .iter()
            .filter(|s| s.kind.is_contradiction())
            .map(|s| ordered(&s.source, &s.target))
            .collect();
        Self { pairs }
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&ordered(a, b))
    }
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
