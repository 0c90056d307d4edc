use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use synaptic_core::config::HeatConfig;
use synaptic_core::graph::Graph;
use synaptic_core::traits::IHeatManager;

use crate::formula;

/// What one heat operation did to the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatReport {
    /// Nodes whose heat changed.
    pub changed: usize,
    /// Nodes sitting at or below the floor afterwards.
    pub at_floor: usize,
    /// Mean heat over all nodes afterwards.
    pub mean_heat: f64,
}

/// Heat maintenance: decay, boost, suppress.
pub struct HeatManager {
    config: HeatConfig,
}

impl HeatManager {
    pub fn new(config: HeatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeatConfig {
        &self.config
    }

    /// Decay every node once at the configured rate.
    pub fn diffuse_heat(&self, graph: &mut Graph) -> HeatReport {
        self.diffuse_with_rate(graph, self.config.decay_rate)
    }

    /// Decay every node once at `decay_rate`. Archived nodes decay too.
    pub fn diffuse_with_rate(&self, graph: &mut Graph, decay_rate: f64) -> HeatReport {
        let floor = self.config.floor;
        let mut changed = 0;
        for node in graph.nodes.values_mut() {
            let before = node.heat();
            let after = formula::decay(before, decay_rate, floor);
            if after != before {
                node.set_heat(after);
                changed += 1;
            }
        }
        let report = self.report(graph, changed);
        debug!(
            changed = report.changed,
            at_floor = report.at_floor,
            mean_heat = report.mean_heat,
            "heat diffused"
        );
        report
    }

    /// Bump `ids` toward 1.0 and stamp their access time. Unknown ids are
    /// ignored.
    pub fn boost<'a>(
        &self,
        graph: &mut Graph,
        ids: impl IntoIterator<Item = &'a str>,
        amount: f64,
        now: DateTime<Utc>,
    ) -> HeatReport {
        let mut changed = 0;
        for id in ids {
            if let Some(node) = graph.node_mut(id) {
                let before = node.heat();
                node.set_heat(formula::boost(before, amount));
                node.last_accessed = Some(now);
                if node.heat() != before {
                    changed += 1;
                }
            }
        }
        let report = self.report(graph, changed);
        debug!(changed = report.changed, amount, "heat boosted");
        report
    }

    /// Drive one node's heat down to the floor. Returns whether it changed.
    pub fn suppress(&self, graph: &mut Graph, id: &str) -> bool {
        let floor = self.config.floor;
        match graph.node_mut(id) {
            Some(node) if node.heat() > floor => {
                node.set_heat(floor);
                debug!(node = id, floor, "heat suppressed");
                true
            }
            _ => false,
        }
    }

    fn report(&self, graph: &Graph, changed: usize) -> HeatReport {
        let floor = self.config.floor;
        HeatReport {
            changed,
            at_floor: graph.nodes.values().filter(|n| n.heat() <= floor).count(),
            mean_heat: graph.mean_heat(),
        }
    }
}

impl Default for HeatManager {
    fn default() -> Self {
        Self::new(HeatConfig::default())
    }
}

impl IHeatManager for HeatManager {
    fn diffuse(&self, graph: &mut Graph) -> usize {
        self.diffuse_heat(graph).changed
    }
}
