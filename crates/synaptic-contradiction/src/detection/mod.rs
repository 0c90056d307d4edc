//! Contradiction detection strategies, most specific first.

pub mod absolute_statement;
pub mod explicit;
pub mod negation;
pub mod topic;

use synaptic_core::graph::Node;
use synaptic_core::models::ContradictionSource;

/// Run the textual strategies against a pair of nodes.
///
/// Returns the first match with a human-readable description.
pub fn detect_textual(a: &Node, b: &Node, overlap_threshold: f64) -> Option<(ContradictionSource, String)> {
    let a_text = a.text();
    let b_text = b.text();

    if absolute_statement::conflicts(&a_text, &b_text, overlap_threshold) {
        return Some((
            ContradictionSource::AbsoluteStatement,
            format!("absolute statement conflict: '{}' vs '{}'", a.label, b.label),
        ));
    }
    if negation::conflicts(&a_text, &b_text, overlap_threshold) {
        return Some((
            ContradictionSource::Negation,
            format!("opposite claims on the same topic: '{}' vs '{}'", a.label, b.label),
        ));
    }
    None
}
