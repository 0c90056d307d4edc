use serde::{Deserialize, Serialize};

use super::defaults;

/// Context selection (MMR) parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// When false, selection keeps the top-k by biased energy.
    #[serde(alias = "enablePruning")]
    pub enabled: bool,
    /// Relevance/diversity trade-off, 0–1.
    #[serde(alias = "mmrLambda")]
    pub mmr_lambda: f64,
    /// Number of memories injected as context.
    pub context_size: usize,
    /// Relevance given to candidates with no lexical overlap.
    pub relevance_floor: f64,
    /// Redundancy between two nodes of the same category without embeddings.
    pub same_category_redundancy: f64,
    /// Redundancy between two nodes of different categories without embeddings.
    pub cross_category_redundancy: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_PRUNING_ENABLED,
            mmr_lambda: defaults::DEFAULT_MMR_LAMBDA,
            context_size: defaults::DEFAULT_CONTEXT_SIZE,
            relevance_floor: defaults::DEFAULT_RELEVANCE_FLOOR,
            same_category_redundancy: defaults::DEFAULT_SAME_CATEGORY_REDUNDANCY,
            cross_category_redundancy: defaults::DEFAULT_CROSS_CATEGORY_REDUNDANCY,
        }
    }
}
