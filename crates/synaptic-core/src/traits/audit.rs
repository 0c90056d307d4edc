use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Data-integrity events reported by the engine instead of failing a pulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A synapse points at a node that does not exist; it was skipped.
    DanglingSynapse {
        source: String,
        target: String,
        missing: String,
    },
    /// A proposed memory matched an existing node and was folded into it.
    MergedDuplicate { proposed_label: String, existing_id: String },
}

/// The caller's audit channel.
pub trait IAuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Audit sink that logs through `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl IAuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        match &event {
            AuditEvent::DanglingSynapse {
                source,
                target,
                missing,
            } => tracing::warn!(%source, %target, %missing, "skipping dangling synapse"),
            AuditEvent::MergedDuplicate {
                proposed_label,
                existing_id,
            } => tracing::warn!(%proposed_label, %existing_id, "proposed memory merged into existing node"),
        }
    }
}

/// Audit sink that keeps events in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<AuditEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl IAuditSink for MemoryAuditSink {
    fn record(&self, event: AuditEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
