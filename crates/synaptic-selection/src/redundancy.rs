//! Similarity between candidates.

use synaptic_core::config::SelectionConfig;
use synaptic_core::graph::{Node, NodeCategory};

/// Cosine similarity between two vectors, 0.0 for zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// What the selector knows about one candidate.
#[derive(Debug, Clone, Copy)]
pub struct Profile<'a> {
    pub category: NodeCategory,
    pub embedding: Option<&'a [f32]>,
}

impl<'a> Profile<'a> {
    pub fn of(node: &'a Node) -> Self {
        Self {
            category: node.category,
            embedding: node.embedding.as_deref(),
        }
    }
}

/// Similarity in [0, 1]. Embedding cosine when both sides carry embeddings
/// of the same non-zero length, otherwise the category heuristic.
pub fn similarity(a: &Profile<'_>, b: &Profile<'_>, config: &SelectionConfig) -> f64 {
    match (a.embedding, b.embedding) {
        (Some(x), Some(y)) if x.len() == y.len() && !x.is_empty() => {
            cosine_similarity(x, y).clamp(0.0, 1.0)
        }
        _ if a.category == b.category => config.same_category_redundancy,
        _ => config.cross_category_redundancy,
    }
}

/// Max similarity of `candidate` to anything already selected.
pub fn redundancy(candidate: &Profile<'_>, selected: &[Profile<'_>], config: &SelectionConfig) -> f64 {
    selected
        .iter()
        .map(|s| similarity(candidate, s, config))
        .fold(0.0, f64::max)
}
