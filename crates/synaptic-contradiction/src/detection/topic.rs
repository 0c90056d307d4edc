//! Content-word overlap between two texts.

use std::collections::BTreeSet;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in", "is",
    "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "will", "with",
];

const TYPOGRAPHIC_APOSTROPHE: char = '\u{2019}';

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == TYPOGRAPHIC_APOSTROPHE
}

/// Lowercased words, apostrophes kept so "don't" stays one word. A
/// typographic apostrophe is normalized to `'`.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || is_apostrophe(c)))
        .map(|w| {
            w.trim_matches(is_apostrophe)
                .replace(TYPOGRAPHIC_APOSTROPHE, "'")
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Words that carry topic, minus stopwords and anything in `exclude`.
pub fn content_words(text: &str, exclude: &dyn Fn(&str) -> bool) -> BTreeSet<String> {
    words(text)
        .into_iter()
        .filter(|w| w.chars().count() > 1)
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .filter(|w| !exclude(w))
        .collect()
}

/// Jaccard similarity, 0.0 when either side is empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let union = a.union(b).count();
    shared as f64 / union as f64
}
