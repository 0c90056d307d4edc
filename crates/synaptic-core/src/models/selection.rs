use serde::{Deserialize, Serialize};

use super::activated_node::ActivatedNode;
use super::pruning_log::{PruningAction, PruningLog};

/// Result of context selection: what goes into the prompt, and why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub selected: Vec<ActivatedNode>,
    pub trace: Vec<PruningLog>,
}

impl Selection {
    /// Ids of the selected nodes, in selection order.
    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(|n| n.node_id.as_str()).collect()
    }

    /// Trace entries for candidates that were dropped.
    pub fn pruned(&self) -> impl Iterator<Item = &PruningLog> {
        self.trace
            .iter()
            .filter(|log| log.action == PruningAction::Pruned)
    }

    /// True when nothing was selected: the "no relevant memory" state.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
