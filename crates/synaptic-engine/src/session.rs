use std::sync::{Mutex, MutexGuard, PoisonError};

use synaptic_core::errors::SynapticResult;
use synaptic_core::graph::{Graph, NodeId};
use synaptic_core::models::{ContradictionRecord, ProposedNode};
use synaptic_core::traits::ISynthesizer;
use synaptic_telemetry::TelemetryHistory;

use crate::pulse::{PreparedPulse, PulseEngine, PulseOutcome, Resolution};

/// One logical session: a graph, the engine that pulses it, and the
/// telemetry history. The graph lock is held for the whole pulse, so at
/// most one pulse is in flight per session.
pub struct GraphSession {
    graph: Mutex<Graph>,
    engine: PulseEngine,
    history: Mutex<TelemetryHistory>,
}

impl GraphSession {
    pub fn new(graph: Graph, engine: PulseEngine) -> Self {
        let capacity = engine.config().observability.history_capacity;
        Self {
            graph: Mutex::new(graph),
            engine,
            history: Mutex::new(TelemetryHistory::new(capacity)),
        }
    }

    pub fn engine(&self) -> &PulseEngine {
        &self.engine
    }

    /// Run a full pulse under the session lock.
    pub fn pulse(
        &self,
        query: &str,
        seeds: &[NodeId],
        synthesizer: &dyn ISynthesizer,
    ) -> SynapticResult<PulseOutcome> {
        let mut graph = lock(&self.graph);
        let outcome = self.engine.run(&mut graph, query, seeds, synthesizer)?;
        self.record(&outcome);
        Ok(outcome)
    }

    /// Start an interactive pulse. The session stays locked until the
    /// returned guard is committed or dropped.
    pub fn begin(&self, query: &str, seeds: &[NodeId]) -> PulseGuard<'_> {
        let graph = lock(&self.graph);
        let prepared = self.engine.prepare(&graph, query, seeds);
        PulseGuard {
            session: self,
            graph,
            prepared,
        }
    }

    /// Read the graph under the lock.
    pub fn with_graph<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&lock(&self.graph))
    }

    /// Copy of the telemetry history.
    pub fn history(&self) -> TelemetryHistory {
        lock(&self.history).clone()
    }

    pub fn into_graph(self) -> Graph {
        self.graph.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, outcome: &PulseOutcome) {
        lock(&self.history).push(outcome.telemetry.clone());
    }
}

/// A pulse in progress. Holds the session lock; dropping it without
/// committing abandons the pulse and leaves the graph unchanged.
pub struct PulseGuard<'s> {
    session: &'s GraphSession,
    graph: MutexGuard<'s, Graph>,
    prepared: PreparedPulse,
}

impl PulseGuard<'_> {
    pub fn prepared(&self) -> &PreparedPulse {
        &self.prepared
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn resolve(&mut self, winner: &str) -> SynapticResult<Resolution> {
        self.session
            .engine
            .resolve(&self.graph, &mut self.prepared, winner)
    }

    pub fn dismiss(&mut self) -> SynapticResult<ContradictionRecord> {
        self.session.engine.dismiss(&mut self.prepared)
    }

    /// Run `synthesizer` over the selected context and commit.
    pub fn synthesize_and_commit(self, synthesizer: &dyn ISynthesizer) -> SynapticResult<PulseOutcome> {
        let proposed = synthesizer.synthesize(
            &self.prepared.query,
            self.prepared.context(),
            &self.graph,
        )?;
        self.commit(proposed)
    }

    pub fn commit(self, proposed: Vec<ProposedNode>) -> SynapticResult<PulseOutcome> {
        let PulseGuard {
            session,
            mut graph,
            prepared,
        } = self;
        let outcome = session.engine.commit(&mut graph, prepared, proposed)?;
        session.record(&outcome);
        Ok(outcome)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
