use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of one candidate in context selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PruningAction {
    Selected,
    Pruned,
}

/// One entry of the context-selection trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PruningLog {
    /// Selection round the decision was made in (1-based for selections,
    /// the final round for pruned candidates).
    pub step: u32,
    pub node_id: String,
    pub relevance: f64,
    pub redundancy: f64,
    pub score: f64,
    pub action: PruningAction,
    pub reason: String,
}
