use synaptic_core::graph::{Graph, NodeCategory};
use synaptic_core::models::{DeltaKind, TelemetryPoint, WeightDelta};
use synaptic_telemetry::tracing_setup::{self, spans};
use synaptic_telemetry::{cognitive_health, summarize, TelemetryHistory};
use test_fixtures::{activated, chain_graph, graph_from, node};

fn delta(before: f64, after: f64) -> WeightDelta {
    WeightDelta {
        source: "A".into(),
        target: "B".into(),
        before,
        after,
        kind: DeltaKind::Reinforced,
    }
}

// ── summarize ───────────────────────────────────────────────────────────

#[test]
fn summary_of_uniform_graph() {
    let graph = chain_graph();
    let point = summarize(
        &graph,
        &[activated("A", 1.0, 0), activated("B", 0.3, 1)],
        &[delta(0.9, 0.93), delta(0.5, 0.49)],
        12.5,
    );

    assert_eq!(point.node_count, 3);
    assert_eq!(point.synapse_count, 2);
    assert_eq!(point.activated_count, 2);
    assert!((point.activation_pct - 2.0 / 3.0).abs() < 1e-12);
    assert!((point.mean_heat - 1.0).abs() < 1e-12);
    assert!((point.heat_entropy - 3f64.ln()).abs() < 1e-12);
    assert!(point.focus_score.abs() < 1e-12);
    assert!((point.stability_score - 1.0).abs() < 1e-12);
    assert!((point.graph_density - 2.0 / 3.0).abs() < 1e-12);
    assert!((point.mean_weight_delta - 0.02).abs() < 1e-9);
    assert!((point.max_weight_delta - 0.03).abs() < 1e-9);
    assert_eq!(point.latency_ms, 12.5);
    // focus 0, stability 1, arousal 0 at mean heat 1.0.
    assert!((point.cognitive_health - 0.4).abs() < 1e-12);
}

#[test]
fn heat_variance_lowers_stability() {
    let mut graph = graph_from(&[("a", NodeCategory::Fact), ("b", NodeCategory::Fact)], &[]);
    graph.node_mut("b").unwrap().set_heat(0.0);
    let point = summarize(&graph, &[], &[], 0.0);
    // variance of {1, 0} is 0.25.
    assert!((point.stability_score - 1.0 / 3.5).abs() < 1e-12);
    assert_eq!(point.focus_score, 1.0);
    assert_eq!(point.heat_entropy, 0.0);
}

#[test]
fn empty_graph_is_all_zeros() {
    let point = summarize(&Graph::new(), &[], &[], 0.0);
    assert_eq!(point, TelemetryPoint::default());
}

#[test]
fn single_node_is_fully_focused() {
    let graph = graph_from(&[("only", NodeCategory::Concept)], &[]);
    let point = summarize(&graph, &[activated("only", 1.0, 0)], &[], 1.0);
    assert_eq!(point.focus_score, 1.0);
    assert_eq!(point.activation_pct, 1.0);
}

#[test]
fn cold_graph_has_no_nan() {
    let mut graph = Graph::new();
    for id in ["a", "b", "c"] {
        graph.insert_node(node(id, NodeCategory::Fact).with_heat(0.0)).unwrap();
    }
    let point = summarize(&graph, &[], &[], f64::NAN);
    for value in [
        point.heat_entropy,
        point.focus_score,
        point.stability_score,
        point.cognitive_health,
        point.latency_ms,
    ] {
        assert!(value.is_finite());
    }
    assert_eq!(point.focus_score, 0.0);
}

#[test]
fn duplicate_activations_count_once() {
    let graph = chain_graph();
    let point = summarize(&graph, &[activated("A", 1.0, 0), activated("A", 0.5, 1)], &[], 0.0);
    assert_eq!(point.activated_count, 1);
}

#[test]
fn health_matches_blend() {
    let graph = chain_graph();
    let point = summarize(&graph, &[], &[], 0.0);
    let expected = cognitive_health(point.focus_score, point.stability_score, point.mean_heat);
    assert_eq!(point.cognitive_health, expected);
}

// ── history ─────────────────────────────────────────────────────────────

fn point(health: f64, latency_ms: f64) -> TelemetryPoint {
    TelemetryPoint {
        cognitive_health: health,
        latency_ms,
        ..TelemetryPoint::default()
    }
}

#[test]
fn history_evicts_oldest() {
    let mut history = TelemetryHistory::new(2);
    history.push(point(0.1, 1.0));
    history.push(point(0.2, 2.0));
    history.push(point(0.6, 3.0));

    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().unwrap().cognitive_health, 0.6);
    assert!((history.mean_health() - 0.4).abs() < 1e-12);
    assert!((history.mean_latency_ms() - 2.5).abs() < 1e-12);
    assert!((history.health_trend() - 0.4).abs() < 1e-12);
}

#[test]
fn empty_history_is_neutral() {
    let history = TelemetryHistory::new(0);
    assert_eq!(history.capacity(), 1);
    assert!(history.is_empty());
    assert_eq!(history.mean_health(), 0.0);
    assert_eq!(history.health_trend(), 0.0);
    assert!(history.latest().is_none());
}

// ── tracing ─────────────────────────────────────────────────────────────

#[test]
fn init_tracing_is_idempotent() {
    tracing_setup::init_tracing();
    tracing_setup::init_tracing();
    let span = synaptic_telemetry::pulse_span!("what is the deadline", 2);
    let _guard = span.enter();
    let _activation = synaptic_telemetry::activation_span!(2);
    let _learning = synaptic_telemetry::learning_span!(5);
    assert_eq!(spans::names::PULSE, "synaptic.pulse");
}

#[test]
fn telemetry_point_serializes() {
    let point = summarize(&chain_graph(), &[], &[], 3.0);
    let json = serde_json::to_value(&point).unwrap();
    assert_eq!(json["node_count"], 3);
}
