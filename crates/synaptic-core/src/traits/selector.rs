use crate::graph::Graph;
use crate::models::{ActivatedNode, Selection};

/// Re-ranks and truncates the activated set into prompt context.
pub trait IContextSelector: Send + Sync {
    fn select(&self, graph: &Graph, activated: &[ActivatedNode], query: &str, k: usize) -> Selection;
}
