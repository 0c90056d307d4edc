use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A node reached during one pulse. Recomputed every pulse, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivatedNode {
    pub node_id: String,
    /// Raw spreading-activation energy.
    pub energy: f64,
    /// Node heat at activation time.
    pub heat: f64,
    /// Energy blended with heat: `energy · ((1 − heatBias) + heatBias · heat)`.
    pub biased_energy: f64,
    /// Hops from the nearest seed.
    pub depth: u32,
    /// Node ids from the seed to this node, inclusive.
    pub path: Vec<String>,
}

impl ActivatedNode {
    /// Whether this node was a seed of the pulse.
    pub fn is_seed(&self) -> bool {
        self.depth == 0
    }
}
