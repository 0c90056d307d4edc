use serde::{Deserialize, Serialize};

use super::defaults;

/// Heat decay and boost parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatConfig {
    /// Fraction of heat lost per pulse, strictly between 0 and 1.
    pub decay_rate: f64,
    /// Decay never pushes heat below this.
    pub floor: f64,
    /// Fraction of the remaining gap to 1.0 added to activated nodes.
    pub boost: f64,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            decay_rate: defaults::DEFAULT_HEAT_DECAY_RATE,
            floor: defaults::DEFAULT_HEAT_FLOOR,
            boost: defaults::DEFAULT_HEAT_BOOST,
        }
    }
}
