use serde::{Deserialize, Serialize};

use super::defaults;

/// Hebbian learning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LearningConfig {
    #[serde(alias = "enableHebbian")]
    pub enabled: bool,
    /// Learning rate.
    pub eta: f64,
    /// Multiplicative decay applied to links whose endpoints barely co-fired.
    pub eta_decay: f64,
    /// Joint activation above this reinforces an existing link; at or below
    /// it the link decays. Unlinked pairs are linked regardless.
    pub co_firing_floor: f64,
    /// Energy assigned to memories merged during a pulse.
    pub new_memory_energy: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_HEBBIAN_ENABLED,
            eta: defaults::DEFAULT_ETA,
            eta_decay: defaults::DEFAULT_ETA_DECAY,
            co_firing_floor: defaults::DEFAULT_CO_FIRING_FLOOR,
            new_memory_energy: defaults::DEFAULT_NEW_MEMORY_ENERGY,
        }
    }
}
