use synaptic_core::models::*;
use synaptic_core::traits::*;

#[test]
fn sequential_ids_are_monotonic() {
    let ids = SequentialIdGenerator::new("mem");
    assert_eq!(ids.next_id(), "mem-1");
    assert_eq!(ids.next_id(), "mem-2");
}

#[test]
fn uuid_ids_are_unique() {
    let ids = UuidGenerator;
    assert_ne!(ids.next_id(), ids.next_id());
}

#[test]
fn memory_audit_sink_keeps_events_in_order() {
    let sink = MemoryAuditSink::new();
    sink.record(AuditEvent::DanglingSynapse {
        source: "a".into(),
        target: "b".into(),
        missing: "b".into(),
    });
    sink.record(AuditEvent::MergedDuplicate {
        proposed_label: "x".into(),
        existing_id: "n1".into(),
    });
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], AuditEvent::DanglingSynapse { .. }));
}

#[test]
fn weight_delta_magnitude_is_absolute() {
    let delta = WeightDelta {
        source: "a".into(),
        target: "b".into(),
        before: 0.5,
        after: 0.49,
        kind: DeltaKind::Decayed,
    };
    assert!(delta.delta() < 0.0);
    assert!((delta.magnitude() - 0.01).abs() < 1e-12);
}

#[test]
fn contradiction_record_other_side() {
    let record = ContradictionRecord {
        node_a: "x".into(),
        node_b: "y".into(),
        description: "x contradicts y".into(),
        source: ContradictionSource::ExplicitRelation,
        combined_energy: 1.5,
    };
    assert_eq!(record.other("x"), Some("y"));
    assert_eq!(record.other("y"), Some("x"));
    assert_eq!(record.other("z"), None);
    assert!(record.involves("y"));
}

#[test]
fn telemetry_point_serializes_snake_case_fields() {
    let point = TelemetryPoint {
        focus_score: 0.5,
        ..Default::default()
    };
    let json = serde_json::to_value(&point).unwrap();
    assert_eq!(json["focus_score"], 0.5);
    assert_eq!(json["activation_pct"], 0.0);
}

#[test]
fn noop_synthesizer_proposes_nothing() {
    let graph = synaptic_core::Graph::new();
    let proposed = NoOpSynthesizer.synthesize("hello", &[], &graph).unwrap();
    assert!(proposed.is_empty());
}
