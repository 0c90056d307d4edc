//! Lexical relevance of a node to the query.

use std::collections::BTreeSet;

/// Tokens shorter than this are ignored.
const MIN_TOKEN_LEN: usize = 2;

/// Lowercased alphanumeric tokens of at least two characters.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .collect()
}

/// Fraction of query terms present in the node's tokens.
///
/// Zero overlap (including an empty query) gets `floor` instead of 0 so the
/// candidate can still win on diversity or energy.
pub fn relevance(query_terms: &BTreeSet<String>, node_terms: &BTreeSet<String>, floor: f64) -> f64 {
    if query_terms.is_empty() {
        return floor;
    }
    let hits = query_terms.intersection(node_terms).count();
    if hits == 0 {
        return floor;
    }
    (hits as f64 / query_terms.len() as f64).max(floor)
}
