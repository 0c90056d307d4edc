//! Test fixtures for the Synaptic workspace.
//!
//! Golden graphs live as JSON under `test-fixtures/golden/` at the workspace
//! root; small graphs used by many tests are built in code here.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use synaptic_core::graph::{Graph, Node, NodeCategory, Synapse};
use synaptic_core::models::ActivatedNode;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find the data folder.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a golden graph by file stem, e.g. `load_graph("hub")`.
pub fn load_graph(name: &str) -> Graph {
    load_fixture(&format!("golden/{name}.json"))
}

/// A hot node whose label is its id and whose content mentions the id.
pub fn node(id: &str, category: NodeCategory) -> Node {
    Node::new(id, category, id, format!("memory about {id}"))
}

/// The chain A→B (0.9), B→C (0.85), one direction only.
pub fn chain_graph() -> Graph {
    let mut graph = Graph::new();
    for id in ["A", "B", "C"] {
        graph.insert_node(node(id, NodeCategory::Concept)).unwrap();
    }
    graph.add_synapse(Synapse::new("A", "B", 0.9)).unwrap();
    graph.add_synapse(Synapse::new("B", "C", 0.85)).unwrap();
    graph
}

/// Build a graph from `(id, category)` pairs and directed `(source, target,
/// weight)` edges.
pub fn graph_from(nodes: &[(&str, NodeCategory)], edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new();
    for (id, category) in nodes {
        graph.insert_node(node(id, *category)).unwrap();
    }
    for (source, target, weight) in edges {
        graph
            .add_synapse(Synapse::new(*source, *target, *weight))
            .unwrap();
    }
    graph
}

/// Hand-built activated node; `biased_energy` equals `energy`.
pub fn activated(id: &str, energy: f64, depth: u32) -> ActivatedNode {
    ActivatedNode {
        node_id: id.to_string(),
        energy,
        heat: 1.0,
        biased_energy: energy,
        depth,
        path: vec![id.to_string()],
    }
}
