use proptest::prelude::*;

use synaptic_core::config::LearningConfig;
use synaptic_core::graph::{Graph, NodeCategory, Synapse};
use synaptic_core::traits::IHebbianLearner;
use synaptic_hebbian::HebbianLearner;
use test_fixtures::{activated, node};

fn build(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph
            .insert_node(node(&format!("n{i}"), NodeCategory::Concept))
            .unwrap();
    }
    for &(s, t, w) in edges {
        if s != t && s < n && t < n {
            graph
                .add_synapse(Synapse::new(format!("n{s}"), format!("n{t}"), w))
                .unwrap();
        }
    }
    graph
}

proptest! {
    #[test]
    fn weights_stay_in_unit_interval(
        edges in prop::collection::vec((0usize..6, 0usize..6, 0.0f64..=1.0), 0..15),
        energies in prop::collection::vec(0.0f64..=1.0, 6),
        eta in 0.0f64..=1.0,
    ) {
        let mut graph = build(6, &edges);
        let nodes: Vec<_> = energies
            .iter()
            .enumerate()
            .map(|(i, e)| activated(&format!("n{i}"), *e, 1))
            .collect();
        let learner = HebbianLearner::new(LearningConfig { eta, ..LearningConfig::default() });
        for _ in 0..3 {
            for delta in learner.reinforce(&mut graph, &nodes) {
                prop_assert!((0.0..=1.0).contains(&delta.after));
            }
        }
        for synapse in &graph.synapses {
            prop_assert!((0.0..=1.0).contains(&synapse.weight()));
        }
    }

    #[test]
    fn disabled_is_idempotent(
        edges in prop::collection::vec((0usize..5, 0usize..5, 0.0f64..=1.0), 0..10),
        energies in prop::collection::vec(0.0f64..=1.0, 5),
    ) {
        let mut graph = build(5, &edges);
        let snapshot = graph.synapses.clone();
        let nodes: Vec<_> = energies
            .iter()
            .enumerate()
            .map(|(i, e)| activated(&format!("n{i}"), *e, 1))
            .collect();
        let learner = HebbianLearner::new(LearningConfig { enabled: false, ..LearningConfig::default() });
        learner.reinforce(&mut graph, &nodes);
        learner.reinforce(&mut graph, &nodes);
        prop_assert_eq!(graph.synapses, snapshot);
    }
}
