use std::sync::Arc;

use synaptic_core::config::SynapticConfig;
use synaptic_core::errors::{GraphError, PulseError, SynapticError, SynapticResult};
use synaptic_core::graph::{Graph, NodeCategory};
use synaptic_core::models::{ActivatedNode, ContradictionSource, ProposedNode};
use synaptic_core::traits::{
    AuditEvent, ISynthesizer, MemoryAuditSink, NoOpSynthesizer, SequentialIdGenerator,
};
use synaptic_engine::{GraphSession, PulseEngine};
use test_fixtures::load_graph;

fn seeds(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn heat_of(graph: &Graph, id: &str) -> f64 {
    graph.node(id).unwrap().heat()
}

fn snapshot(graph: &Graph) -> serde_json::Value {
    serde_json::to_value(graph).unwrap()
}

/// Proposes a fixed list of memories regardless of context.
struct Proposing(Vec<ProposedNode>);

impl ISynthesizer for Proposing {
    fn synthesize(
        &self,
        _query: &str,
        _context: &[ActivatedNode],
        _graph: &Graph,
    ) -> SynapticResult<Vec<ProposedNode>> {
        Ok(self.0.clone())
    }
}

struct Failing;

impl ISynthesizer for Failing {
    fn synthesize(
        &self,
        _query: &str,
        _context: &[ActivatedNode],
        _graph: &Graph,
    ) -> SynapticResult<Vec<ProposedNode>> {
        Err(PulseError::SynthesisFailed {
            reason: "model unavailable".to_string(),
        }
        .into())
    }
}

// ── construction ────────────────────────────────────────────────────────

#[test]
fn invalid_config_is_rejected() {
    let mut config = SynapticConfig::default();
    config.activation.gamma = 1.5;
    assert!(matches!(
        PulseEngine::new(config),
        Err(SynapticError::Config(_))
    ));
}

// ── full pulse ──────────────────────────────────────────────────────────

#[test]
fn run_learns_and_updates_heat() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default();
    let before_weight = graph.synapse("alice", "hub").unwrap().weight();

    let outcome = engine
        .run(&mut graph, "who leads the apollo migration", &seeds(&["alice"]), &NoOpSynthesizer)
        .unwrap();

    let activated: Vec<&str> = outcome.activated.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(activated[0], "alice");
    assert!(activated.contains(&"hub"));
    assert!(activated.contains(&"spec"));
    assert!(!activated.contains(&"old"));

    assert!(!outcome.selection.is_empty());
    assert!(!outcome.deltas.is_empty());
    assert!(graph.synapse("alice", "hub").unwrap().weight() > before_weight);

    // alice: boosted then decayed.
    let expected = (0.7 + 0.3 * 0.3) * 0.95;
    assert!((heat_of(&graph, "alice") - expected).abs() < 1e-9);
    // bob was not activated: decay only.
    assert!((heat_of(&graph, "bob") - 0.4 * 0.95).abs() < 1e-9);

    assert_eq!(outcome.telemetry.node_count, 6);
    assert_eq!(outcome.telemetry.activated_count, 3);
    assert!(outcome.telemetry.cognitive_health > 0.0);
    assert!(outcome.telemetry.latency_ms >= 0.0);
}

#[test]
fn empty_seeds_still_decay_heat() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default();

    let outcome = engine
        .run(&mut graph, "anything", &[], &NoOpSynthesizer)
        .unwrap();

    assert!(outcome.activated.is_empty());
    assert!(outcome.selection.is_empty());
    assert!(outcome.deltas.is_empty());
    assert!((heat_of(&graph, "hub") - 0.9 * 0.95).abs() < 1e-9);
}

#[test]
fn disabled_learning_leaves_weights() {
    let mut graph = load_graph("hub");
    let mut config = SynapticConfig::default();
    config.learning.enabled = false;
    let engine = PulseEngine::new(config).unwrap();

    let outcome = engine
        .run(&mut graph, "apollo", &seeds(&["alice"]), &NoOpSynthesizer)
        .unwrap();

    assert!(outcome.deltas.is_empty());
    assert_eq!(graph.synapse("alice", "hub").unwrap().weight(), 0.9);
}

#[test]
fn failed_synthesis_leaves_graph_untouched() {
    let mut graph = load_graph("hub");
    let before = snapshot(&graph);
    let engine = PulseEngine::default();

    let err = engine
        .run(&mut graph, "apollo", &seeds(&["alice"]), &Failing)
        .unwrap_err();

    assert!(matches!(
        err,
        SynapticError::Pulse(PulseError::SynthesisFailed { .. })
    ));
    assert_eq!(snapshot(&graph), before);
}

// ── contradictions ──────────────────────────────────────────────────────

#[test]
fn run_refuses_unresolved_contradiction() {
    let mut graph = load_graph("hub");
    let before = snapshot(&graph);
    let engine = PulseEngine::default();

    let err = engine
        .run(&mut graph, "apollo deadline", &seeds(&["deadline"]), &NoOpSynthesizer)
        .unwrap_err();

    match err {
        SynapticError::Pulse(PulseError::UnresolvedContradiction { node_a, node_b }) => {
            assert_eq!((node_a.as_str(), node_b.as_str()), ("deadline", "old"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(snapshot(&graph), before);
}

#[test]
fn prepare_reports_pending_contradiction() {
    let graph = load_graph("hub");
    let engine = PulseEngine::default();

    let pulse = engine.prepare(&graph, "apollo deadline", &seeds(&["deadline"]));

    assert!(pulse.is_blocked());
    let record = pulse.pending_contradiction().unwrap();
    assert_eq!(record.source, ContradictionSource::ExplicitRelation);
    assert!(record.involves("deadline") && record.involves("old"));
}

#[test]
fn resolve_suppresses_loser_and_commits() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default();
    let mut pulse = engine.prepare(&graph, "apollo deadline", &seeds(&["deadline"]));
    assert!(pulse.selection.selected_ids().contains(&"old"));

    let resolution = engine.resolve(&graph, &mut pulse, "deadline").unwrap();
    assert_eq!(resolution.winner, "deadline");
    assert_eq!(resolution.loser, "old");
    assert!(!pulse.is_blocked());
    assert!(!pulse.selection.selected_ids().contains(&"old"));

    let outcome = engine.commit(&mut graph, pulse, Vec::new()).unwrap();

    assert_eq!(outcome.resolutions.len(), 1);
    assert_eq!(heat_of(&graph, "old"), 0.05);
    assert!((heat_of(&graph, "deadline") - (0.8 + 0.3 * 0.2) * 0.95).abs() < 1e-9);
    assert!(outcome.deltas.iter().all(|d| d.source != "old" && d.target != "old"));
    // The contradiction link itself is never reinforced.
    assert_eq!(graph.synapses_between("deadline", "old").count(), 1);
}

#[test]
fn resolve_rejects_winner_outside_record() {
    let graph = load_graph("hub");
    let engine = PulseEngine::default();
    let mut pulse = engine.prepare(&graph, "apollo deadline", &seeds(&["deadline"]));

    let err = engine.resolve(&graph, &mut pulse, "hub").unwrap_err();

    assert!(matches!(
        err,
        SynapticError::Pulse(PulseError::InvalidWinner { ref winner }) if winner == "hub"
    ));
    assert!(pulse.is_blocked());
}

#[test]
fn resolve_without_pending_fails() {
    let graph = load_graph("hub");
    let engine = PulseEngine::default();
    let mut pulse = engine.prepare(&graph, "apollo", &seeds(&["alice"]));

    assert!(matches!(
        engine.resolve(&graph, &mut pulse, "alice"),
        Err(SynapticError::Pulse(PulseError::NothingToResolve))
    ));
    assert!(matches!(
        engine.dismiss(&mut pulse),
        Err(SynapticError::Pulse(PulseError::NothingToResolve))
    ));
}

#[test]
fn dismissed_contradiction_keeps_both_sides() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default();
    let mut pulse = engine.prepare(&graph, "apollo deadline", &seeds(&["deadline"]));

    let record = engine.dismiss(&mut pulse).unwrap();
    assert!(record.involves("old"));
    assert!(!pulse.is_blocked());

    let outcome = engine.commit(&mut graph, pulse, Vec::new()).unwrap();

    assert_eq!(outcome.dismissed.len(), 1);
    assert!(outcome.resolutions.is_empty());
    assert!((heat_of(&graph, "old") - (0.3 + 0.3 * 0.7) * 0.95).abs() < 1e-9);
}

#[test]
fn commit_while_blocked_fails() {
    let mut graph = load_graph("hub");
    let before = snapshot(&graph);
    let engine = PulseEngine::default();
    let pulse = engine.prepare(&graph, "apollo deadline", &seeds(&["deadline"]));

    assert!(matches!(
        engine.commit(&mut graph, pulse, Vec::new()),
        Err(SynapticError::Pulse(PulseError::UnresolvedContradiction { .. }))
    ));
    assert_eq!(snapshot(&graph), before);
}

// ── merging proposed memories ───────────────────────────────────────────

#[test]
fn proposed_memory_joins_graph_and_learns() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default()
        .with_id_generator(Arc::new(SequentialIdGenerator::new("mem")));
    let synth = Proposing(vec![ProposedNode::new(
        NodeCategory::Fact,
        "Kickoff",
        "Apollo kickoff is on Monday",
    )]);

    let outcome = engine
        .run(&mut graph, "apollo kickoff", &seeds(&["alice"]), &synth)
        .unwrap();

    assert_eq!(outcome.merged.len(), 1);
    assert_eq!(outcome.merged[0].node_id, "mem-1");
    assert!(outcome.merged[0].created);

    let node = graph.node("mem-1").unwrap();
    assert!(node.created_at.is_some());
    assert!(graph.synapse("mem-1", "alice").is_some());
    assert!(graph.synapse("alice", "mem-1").is_some());
    assert_eq!(outcome.telemetry.node_count, 7);
    // Activation share counts what activation reached, not merged memories.
    assert_eq!(outcome.telemetry.activated_count, outcome.activated.len() as u32);
}

#[test]
fn duplicate_proposal_merges_into_existing_node() {
    let mut graph = load_graph("hub");
    let audit = Arc::new(MemoryAuditSink::new());
    let engine = PulseEngine::default().with_audit(audit.clone());
    let synth = Proposing(vec![ProposedNode::new(
        NodeCategory::Contact,
        "  alice ",
        "Alice leads the Apollo migration",
    )]);

    let outcome = engine
        .run(&mut graph, "apollo", &seeds(&["hub"]), &synth)
        .unwrap();

    assert_eq!(outcome.merged[0].node_id, "alice");
    assert!(!outcome.merged[0].created);
    assert_eq!(graph.node_count(), 6);
    assert!(audit.events().iter().any(|e| matches!(
        e,
        AuditEvent::MergedDuplicate { existing_id, .. } if existing_id == "alice"
    )));
}

#[test]
fn duplicate_of_activated_node_is_boosted_once() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default();
    let synth = Proposing(vec![ProposedNode::new(
        NodeCategory::Contact,
        "Alice",
        "Alice leads the Apollo migration",
    )]);

    let outcome = engine
        .run(&mut graph, "apollo", &seeds(&["alice"]), &synth)
        .unwrap();

    assert_eq!(outcome.merged[0].node_id, "alice");
    assert!(!outcome.merged[0].created);
    let expected = (0.7 + 0.3 * 0.3) * 0.95;
    assert!((heat_of(&graph, "alice") - expected).abs() < 1e-9);
    assert_eq!(outcome.telemetry.activated_count, 3);
}

#[test]
fn resolved_loser_still_counts_as_activated() {
    let mut graph = load_graph("hub");
    let engine = PulseEngine::default();
    let mut pulse = engine.prepare(&graph, "apollo deadline", &seeds(&["deadline"]));
    engine.resolve(&graph, &mut pulse, "deadline").unwrap();

    let outcome = engine.commit(&mut graph, pulse, Vec::new()).unwrap();

    assert_eq!(outcome.activated.len(), 3);
    assert_eq!(outcome.telemetry.activated_count, 3);
    assert!((outcome.telemetry.activation_pct - 0.5).abs() < 1e-12);
}

#[test]
fn taken_explicit_id_fails_without_changes() {
    let mut graph = load_graph("hub");
    let before = snapshot(&graph);
    let engine = PulseEngine::default();
    let synth = Proposing(vec![ProposedNode::new(
        NodeCategory::Fact,
        "Something else",
        "Unrelated memory",
    )
    .with_id("bob")]);

    let err = engine
        .run(&mut graph, "apollo", &seeds(&["alice"]), &synth)
        .unwrap_err();

    assert!(matches!(
        err,
        SynapticError::Graph(GraphError::DuplicateNode { ref id }) if id == "bob"
    ));
    assert_eq!(snapshot(&graph), before);
}

// ── sessions ────────────────────────────────────────────────────────────

#[test]
fn session_records_history() {
    let session = GraphSession::new(load_graph("hub"), PulseEngine::default());

    session
        .pulse("apollo", &seeds(&["alice"]), &NoOpSynthesizer)
        .unwrap();
    session
        .pulse("billing", &seeds(&["spec"]), &NoOpSynthesizer)
        .unwrap();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().unwrap().node_count, 6);
}

#[test]
fn failed_session_pulse_records_nothing() {
    let session = GraphSession::new(load_graph("hub"), PulseEngine::default());

    assert!(session
        .pulse("apollo deadline", &seeds(&["deadline"]), &NoOpSynthesizer)
        .is_err());
    assert!(session.history().is_empty());
}

#[test]
fn guard_resolves_and_commits() {
    let session = GraphSession::new(load_graph("hub"), PulseEngine::default());

    let mut guard = session.begin("apollo deadline", &seeds(&["deadline"]));
    assert!(guard.prepared().is_blocked());
    guard.resolve("deadline").unwrap();
    let outcome = guard.synthesize_and_commit(&NoOpSynthesizer).unwrap();

    assert_eq!(outcome.resolutions[0].loser, "old");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.with_graph(|g| heat_of(g, "old")), 0.05);
}

#[test]
fn dropped_guard_abandons_pulse() {
    let session = GraphSession::new(load_graph("hub"), PulseEngine::default());
    let before = session.with_graph(snapshot);

    {
        let guard = session.begin("apollo deadline", &seeds(&["deadline"]));
        assert!(guard.prepared().is_blocked());
    }

    assert_eq!(session.with_graph(snapshot), before);
    assert!(session.history().is_empty());

    // The lock was released: the next pulse runs.
    session
        .pulse("apollo", &seeds(&["alice"]), &NoOpSynthesizer)
        .unwrap();
    assert_eq!(session.history().len(), 1);
}

#[test]
fn outcome_serializes() {
    let mut graph = load_graph("hub");
    let outcome = PulseEngine::default()
        .run(&mut graph, "apollo", &seeds(&["alice"]), &NoOpSynthesizer)
        .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert!(json["telemetry"]["cognitive_health"].is_number());
    assert!(json["selection"]["selected"].is_array());
}
