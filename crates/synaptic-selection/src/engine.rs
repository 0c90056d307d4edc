use tracing::debug;

use synaptic_core::config::SelectionConfig;
use synaptic_core::graph::Graph;
use synaptic_core::models::{ActivatedNode, Selection};
use synaptic_core::traits::IContextSelector;

use crate::mmr;

/// MMR context selector.
pub struct ContextSelector {
    config: SelectionConfig,
}

impl ContextSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Select with the configured context size.
    pub fn select_default(&self, graph: &Graph, activated: &[ActivatedNode], query: &str) -> Selection {
        self.select(graph, activated, query, self.config.context_size)
    }
}

impl Default for ContextSelector {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl IContextSelector for ContextSelector {
    fn select(&self, graph: &Graph, activated: &[ActivatedNode], query: &str, k: usize) -> Selection {
        let selection = mmr::select(graph, activated, query, k, &self.config);
        debug!(
            candidates = activated.len(),
            selected = selection.selected.len(),
            pruning = self.config.enabled,
            k,
            "context selected"
        );
        selection
    }
}
