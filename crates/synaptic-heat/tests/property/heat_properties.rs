use proptest::prelude::*;

use synaptic_core::config::HeatConfig;
use synaptic_core::graph::{Graph, NodeCategory};
use synaptic_heat::HeatManager;
use test_fixtures::node;

fn graph_with_heats(heats: &[f64]) -> Graph {
    let mut graph = Graph::new();
    for (i, heat) in heats.iter().enumerate() {
        graph
            .insert_node(node(&format!("n{i}"), NodeCategory::Fact).with_heat(*heat))
            .unwrap();
    }
    graph
}

// ── Monotonic decay ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_diffusion_never_raises_heat(
        heats in prop::collection::vec(0.0f64..=1.0, 1..20),
        rate in 0.001f64..0.999,
        floor in 0.0f64..=0.5,
    ) {
        let manager = HeatManager::new(HeatConfig { decay_rate: rate, floor, ..HeatConfig::default() });
        let mut graph = graph_with_heats(&heats);

        for _ in 0..3 {
            let before: Vec<f64> = graph.nodes.values().map(|n| n.heat()).collect();
            manager.diffuse_heat(&mut graph);
            let after: Vec<f64> = graph.nodes.values().map(|n| n.heat()).collect();
            for (b, a) in before.iter().zip(&after) {
                prop_assert!(a <= b);
                prop_assert!(*a >= 0.0);
                prop_assert!(*a >= floor.min(*b));
            }
        }
    }

    #[test]
    fn boost_stays_in_unit_interval(
        heats in prop::collection::vec(0.0f64..=1.0, 1..10),
        amount in 0.0f64..=1.0,
    ) {
        let manager = HeatManager::default();
        let mut graph = graph_with_heats(&heats);
        let before: Vec<f64> = graph.nodes.values().map(|n| n.heat()).collect();
        let ids: Vec<String> = graph.nodes.keys().cloned().collect();
        manager.boost(&mut graph, ids.iter().map(String::as_str), amount, chrono::Utc::now());
        for (n, b) in graph.nodes.values().zip(&before) {
            prop_assert!(n.heat() <= 1.0);
            prop_assert!(n.heat() >= *b);
        }
    }
}
