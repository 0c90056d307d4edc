use proptest::prelude::*;

use synaptic_activation::activate;
use synaptic_core::config::ActivationConfig;
use synaptic_core::graph::{Graph, NodeCategory, Synapse};
use synaptic_core::traits::TracingAuditSink;
use test_fixtures::node;

fn arb_graph() -> impl Strategy<Value = Graph> {
    (2usize..12).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0.0f64..=1.0), 0..(n * 3));
        let heats = prop::collection::vec(0.0f64..=1.0, n);
        (Just(n), edges, heats).prop_map(|(n, edges, heats)| {
            let mut graph = Graph::new();
            for (i, heat) in heats.into_iter().enumerate().take(n) {
                graph
                    .insert_node(node(&format!("n{i:02}"), NodeCategory::Fact).with_heat(heat))
                    .unwrap();
            }
            for (s, t, w) in edges {
                if s != t {
                    graph
                        .add_synapse(Synapse::new(format!("n{s:02}"), format!("n{t:02}"), w))
                        .unwrap();
                }
            }
            graph
        })
    })
}

fn arb_config() -> impl Strategy<Value = ActivationConfig> {
    (0.1f64..=1.0, 0.0f64..0.9, 0.0f64..=1.0, 1u32..5, 0.5f64..20.0).prop_map(
        |(gamma, theta, heat_bias, max_depth, energy_budget)| ActivationConfig {
            gamma,
            theta,
            heat_bias,
            max_depth,
            energy_budget,
            ..ActivationConfig::default()
        },
    )
}

proptest! {
    #[test]
    fn activation_is_deterministic(graph in arb_graph(), config in arb_config()) {
        let seeds = vec!["n00".to_string(), "n01".to_string()];
        let first = activate(&graph, &seeds, &config, &TracingAuditSink);
        let second = activate(&graph, &seeds, &config, &TracingAuditSink);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn energies_bounded_and_budget_respected(graph in arb_graph(), config in arb_config()) {
        let seeds = vec!["n00".to_string()];
        let out = activate(&graph, &seeds, &config, &TracingAuditSink);

        let total: f64 = out.iter().map(|n| n.biased_energy).sum();
        prop_assert!(total <= config.energy_budget + 1e-9);

        for n in &out {
            prop_assert!(n.energy >= 0.0 && n.energy <= 1.0);
            prop_assert!(n.depth <= config.max_depth);
            prop_assert_eq!(n.path.len(), n.depth as usize + 1);
            if n.depth > 0 {
                prop_assert!(n.energy < 1.0);
            }
        }
    }

    #[test]
    fn each_node_appears_once_and_sorted(graph in arb_graph(), config in arb_config()) {
        let seeds = vec!["n00".to_string(), "n03".to_string()];
        let out = activate(&graph, &seeds, &config, &TracingAuditSink);
        let mut ids: Vec<&str> = out.iter().map(|n| n.node_id.as_str()).collect();
        for pair in out.windows(2) {
            prop_assert!(pair[0].biased_energy >= pair[1].biased_energy);
        }
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }
}
