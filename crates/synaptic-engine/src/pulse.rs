use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use synaptic_activation::ActivationEngine;
use synaptic_contradiction::ContradictionDetector;
use synaptic_core::config::SynapticConfig;
use synaptic_core::errors::{PulseError, SynapticResult};
use synaptic_core::graph::{Graph, NodeId};
use synaptic_core::models::{
    ActivatedNode, ContradictionRecord, ProposedNode, Selection, TelemetryPoint, WeightDelta,
};
use synaptic_core::traits::{
    IActivationEngine, IAuditSink, IContextSelector, IContradictionDetector, IIdGenerator,
    ISynthesizer, TracingAuditSink, UuidGenerator,
};
use synaptic_heat::{HeatManager, HeatReport};
use synaptic_hebbian::HebbianLearner;
use synaptic_selection::ContextSelector;
use synaptic_telemetry::{activation_span, learning_span, pulse_span, summarize};

use crate::merge::{merge_proposed, MergeOutcome};

/// A contradiction the caller settled by picking a winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: NodeId,
    pub loser: NodeId,
    pub record: ContradictionRecord,
}

/// Read-only half of a pulse: activation, contradictions, selection.
///
/// Holds no reference to the graph. Commit it against the same graph it
/// was prepared from.
#[derive(Debug, Clone)]
pub struct PreparedPulse {
    pub query: String,
    pub activated: Vec<ActivatedNode>,
    /// Contradictions still waiting for the caller, highest priority first.
    pub pending: Vec<ContradictionRecord>,
    pub resolutions: Vec<Resolution>,
    pub dismissed: Vec<ContradictionRecord>,
    pub selection: Selection,
    started: Instant,
}

impl PreparedPulse {
    /// The contradiction the caller must settle next.
    pub fn pending_contradiction(&self) -> Option<&ContradictionRecord> {
        self.pending.first()
    }

    /// Whether commit is refused until contradictions are settled.
    pub fn is_blocked(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Nodes that lost a resolved contradiction.
    pub fn losers(&self) -> BTreeSet<&str> {
        self.resolutions.iter().map(|r| r.loser.as_str()).collect()
    }

    /// The selected context, in selection order.
    pub fn context(&self) -> &[ActivatedNode] {
        &self.selection.selected
    }
}

/// Everything a committed pulse produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseOutcome {
    pub query: String,
    pub activated: Vec<ActivatedNode>,
    pub selection: Selection,
    pub resolutions: Vec<Resolution>,
    pub dismissed: Vec<ContradictionRecord>,
    pub merged: Vec<MergeOutcome>,
    pub deltas: Vec<WeightDelta>,
    pub heat: HeatReport,
    pub telemetry: TelemetryPoint,
}

/// The pulse orchestrator.
pub struct PulseEngine {
    config: SynapticConfig,
    activation: ActivationEngine,
    heat: HeatManager,
    learner: HebbianLearner,
    selector: ContextSelector,
    detector: ContradictionDetector,
    ids: Arc<dyn IIdGenerator>,
    audit: Arc<dyn IAuditSink>,
}

impl PulseEngine {
    /// Validate `config` and build every component from it.
    pub fn new(config: SynapticConfig) -> SynapticResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SynapticConfig) -> Self {
        let audit: Arc<dyn IAuditSink> = Arc::new(TracingAuditSink);
        Self {
            activation: ActivationEngine::new(config.activation.clone()).with_audit(audit.clone()),
            heat: HeatManager::new(config.heat.clone()),
            learner: HebbianLearner::new(config.learning.clone()),
            selector: ContextSelector::new(config.selection.clone()),
            detector: ContradictionDetector::new(config.contradiction.clone()),
            ids: Arc::new(UuidGenerator),
            audit,
            config,
        }
    }

    /// Use `ids` for proposed memories without an id.
    pub fn with_id_generator(mut self, ids: Arc<dyn IIdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Route audit events (dangling synapses, merged duplicates) to `audit`.
    pub fn with_audit(mut self, audit: Arc<dyn IAuditSink>) -> Self {
        self.activation = ActivationEngine::new(self.config.activation.clone()).with_audit(audit.clone());
        self.audit = audit;
        self
    }

    pub fn config(&self) -> &SynapticConfig {
        &self.config
    }

    /// Activate, check for contradictions, and select context. Never
    /// mutates the graph.
    pub fn prepare(&self, graph: &Graph, query: &str, seeds: &[NodeId]) -> PreparedPulse {
        let started = Instant::now();
        let activated = {
            let span = activation_span!(seeds.len());
            let _guard = span.enter();
            self.activation.activate(graph, seeds)
        };
        let pending = self.detector.detect(graph, &activated);
        let selection = self
            .selector
            .select(graph, &activated, query, self.config.selection.context_size);

        if let Some(first) = pending.first() {
            info!(
                node_a = %first.node_a,
                node_b = %first.node_b,
                pending = pending.len(),
                "pulse paused on contradiction"
            );
        }
        if selection.is_empty() {
            debug!(query, "no relevant memory for query");
        }

        PreparedPulse {
            query: query.to_string(),
            activated,
            pending,
            resolutions: Vec::new(),
            dismissed: Vec::new(),
            selection,
            started,
        }
    }

    /// Settle the pending contradiction in favor of `winner`.
    ///
    /// The loser leaves the context now and has its heat suppressed at
    /// commit. Other pending records involving the loser are dropped.
    pub fn resolve(
        &self,
        graph: &Graph,
        pulse: &mut PreparedPulse,
        winner: &str,
    ) -> SynapticResult<Resolution> {
        let record = pulse
            .pending_contradiction()
            .cloned()
            .ok_or(PulseError::NothingToResolve)?;
        let loser = record
            .other(winner)
            .ok_or_else(|| PulseError::InvalidWinner {
                winner: winner.to_string(),
            })?
            .to_string();

        pulse.pending.retain(|r| !r.involves(&loser));
        let resolution = Resolution {
            winner: winner.to_string(),
            loser,
            record,
        };
        pulse.resolutions.push(resolution.clone());
        self.reselect(graph, pulse);

        debug!(winner = %resolution.winner, loser = %resolution.loser, "contradiction resolved");
        Ok(resolution)
    }

    /// Set the pending contradiction aside; both sides stay.
    pub fn dismiss(&self, pulse: &mut PreparedPulse) -> SynapticResult<ContradictionRecord> {
        if pulse.pending.is_empty() {
            return Err(PulseError::NothingToResolve.into());
        }
        let record = pulse.pending.remove(0);
        pulse.dismissed.push(record.clone());
        Ok(record)
    }

    fn reselect(&self, graph: &Graph, pulse: &mut PreparedPulse) {
        let losers = pulse.losers();
        let candidates: Vec<ActivatedNode> = pulse
            .activated
            .iter()
            .filter(|n| !losers.contains(n.node_id.as_str()))
            .cloned()
            .collect();
        pulse.selection = self.selector.select(
            graph,
            &candidates,
            &pulse.query,
            self.config.selection.context_size,
        );
    }

    /// Apply a prepared pulse: merge proposed memories, learn, update heat,
    /// measure. All of it lands on a working copy that replaces `graph`
    /// only if every step succeeds.
    pub fn commit(
        &self,
        graph: &mut Graph,
        pulse: PreparedPulse,
        proposed: Vec<ProposedNode>,
    ) -> SynapticResult<PulseOutcome> {
        if let Some(record) = pulse.pending_contradiction() {
            return Err(PulseError::UnresolvedContradiction {
                node_a: record.node_a.clone(),
                node_b: record.node_b.clone(),
            }
            .into());
        }

        let now = Utc::now();
        let mut working = graph.clone();
        let merged = merge_proposed(&mut working, proposed, self.ids.as_ref(), self.audit.as_ref(), now)?;

        let co_active = self.co_active(&working, &pulse, &merged);
        let deltas = {
            let span = learning_span!(co_active.len());
            let _guard = span.enter();
            self.learner.plan(&working, &co_active).commit(&mut working)?
        };

        self.heat.boost(
            &mut working,
            co_active.iter().map(|n| n.node_id.as_str()),
            self.config.heat.boost,
            now,
        );
        for resolution in &pulse.resolutions {
            self.heat.suppress(&mut working, &resolution.loser);
        }
        let heat = self.heat.diffuse_heat(&mut working);

        let latency_ms = pulse.started.elapsed().as_secs_f64() * 1000.0;
        let telemetry = summarize(&working, &pulse.activated, &deltas, latency_ms);

        *graph = working;

        info!(
            activated = pulse.activated.len(),
            selected = pulse.selection.selected.len(),
            merged = merged.len(),
            deltas = deltas.len(),
            health = telemetry.cognitive_health,
            latency_ms,
            "pulse committed"
        );

        Ok(PulseOutcome {
            query: pulse.query,
            activated: pulse.activated,
            selection: pulse.selection,
            resolutions: pulse.resolutions,
            dismissed: pulse.dismissed,
            merged,
            deltas,
            heat,
            telemetry,
        })
    }

    /// Activated nodes minus contradiction losers, plus merged memories at
    /// `learning.new_memory_energy`. One entry per id, at its highest
    /// energy; a proposal that folded into a loser stays out.
    fn co_active(&self, graph: &Graph, pulse: &PreparedPulse, merged: &[MergeOutcome]) -> Vec<ActivatedNode> {
        let losers = pulse.losers();
        let energy = self.config.learning.new_memory_energy;
        let mut nodes: Vec<ActivatedNode> = Vec::with_capacity(pulse.activated.len() + merged.len());
        let mut position: HashMap<NodeId, usize> = HashMap::new();

        let candidates = pulse.activated.iter().cloned().chain(merged.iter().map(|m| ActivatedNode {
            node_id: m.node_id.clone(),
            energy,
            heat: graph.node(&m.node_id).map_or(0.0, |n| n.heat()),
            biased_energy: energy,
            depth: 0,
            path: vec![m.node_id.clone()],
        }));
        for candidate in candidates {
            if losers.contains(candidate.node_id.as_str()) {
                continue;
            }
            match position.get(&candidate.node_id).copied() {
                Some(i) => {
                    if candidate.energy > nodes[i].energy {
                        nodes[i] = candidate;
                    }
                }
                None => {
                    position.insert(candidate.node_id.clone(), nodes.len());
                    nodes.push(candidate);
                }
            }
        }
        nodes
    }

    /// Prepare, synthesize, and commit in one go. A pulse that hits a
    /// contradiction fails with [`PulseError::UnresolvedContradiction`] and
    /// leaves the graph untouched; use [`PulseEngine::prepare`] and
    /// [`PulseEngine::resolve`] to handle it interactively.
    pub fn run(
        &self,
        graph: &mut Graph,
        query: &str,
        seeds: &[NodeId],
        synthesizer: &dyn ISynthesizer,
    ) -> SynapticResult<PulseOutcome> {
        let span = pulse_span!(query, seeds.len());
        let _guard = span.enter();

        let pulse = self.prepare(graph, query, seeds);
        if let Some(record) = pulse.pending_contradiction() {
            return Err(PulseError::UnresolvedContradiction {
                node_a: record.node_a.clone(),
                node_b: record.node_b.clone(),
            }
            .into());
        }
        let proposed = synthesizer.synthesize(query, pulse.context(), graph)?;
        self.commit(graph, pulse, proposed)
    }
}

impl Default for PulseEngine {
    fn default() -> Self {
        Self::build(SynapticConfig::default())
    }
}
