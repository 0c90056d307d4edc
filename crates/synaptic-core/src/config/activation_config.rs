use serde::{Deserialize, Serialize};

use super::defaults;

/// Spreading-activation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivationConfig {
    /// When false, activation returns the seeds only.
    #[serde(alias = "enableSpreadingActivation")]
    pub enabled: bool,
    /// Energy retained per hop, 0–1.
    pub gamma: f64,
    /// Minimum propagated energy for an edge to fire.
    pub theta: f64,
    /// Blend weight of node heat in biased energy, 0–1.
    #[serde(alias = "heatBias")]
    pub heat_bias: f64,
    /// Hop limit, at least 1.
    #[serde(alias = "maxActivationDepth")]
    pub max_depth: u32,
    /// Ceiling on total biased energy per pulse.
    #[serde(alias = "energyBudget")]
    pub energy_budget: f64,
    /// Let energy flow through hyperedges.
    pub hyperedge_flow: bool,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SPREADING_ENABLED,
            gamma: defaults::DEFAULT_GAMMA,
            theta: defaults::DEFAULT_THETA,
            heat_bias: defaults::DEFAULT_HEAT_BIAS,
            max_depth: defaults::DEFAULT_MAX_ACTIVATION_DEPTH,
            energy_budget: defaults::DEFAULT_ENERGY_BUDGET,
            hyperedge_flow: defaults::DEFAULT_HYPEREDGE_FLOW,
        }
    }
}
