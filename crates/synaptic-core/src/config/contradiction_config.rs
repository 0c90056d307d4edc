use serde::{Deserialize, Serialize};

use super::defaults;

/// Contradiction detection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContradictionConfig {
    /// Nodes at or below this energy do not take part in detection.
    pub activity_floor: f64,
    /// Run the textual negation/absolute-statement heuristics.
    pub text_heuristics: bool,
    /// Minimum content-word overlap for two texts to share a topic.
    pub topic_overlap_threshold: f64,
}

impl Default for ContradictionConfig {
    fn default() -> Self {
        Self {
            activity_floor: defaults::DEFAULT_ACTIVITY_FLOOR,
            text_heuristics: defaults::DEFAULT_TEXT_HEURISTICS,
            topic_overlap_threshold: defaults::DEFAULT_TOPIC_OVERLAP_THRESHOLD,
        }
    }
}
