//! "always"/"never" absolute statement conflict detection.

use regex::Regex;
use std::sync::LazyLock;

use super::topic;

/// Regex for absolute positive statements.
static ALWAYS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(always|every time|without exception|invariably|in all cases)\b").unwrap()
});

/// Regex for absolute negative statements.
static NEVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(never|under no circumstances|at no point|in no case)\b").unwrap()
});

const ABSOLUTE_WORDS: &[&str] = &[
    "always", "every", "time", "without", "exception", "invariably", "all", "cases", "never",
    "under", "no", "circumstances", "point", "case",
];

fn is_absolute_word(word: &str) -> bool {
    ABSOLUTE_WORDS.contains(&word)
}

/// One text says "always", the other says "never", and they share a topic.
pub fn conflicts(a: &str, b: &str, overlap_threshold: f64) -> bool {
    let opposed = (ALWAYS_RE.is_match(a) && NEVER_RE.is_match(b))
        || (NEVER_RE.is_match(a) && ALWAYS_RE.is_match(b));
    if !opposed {
        return false;
    }
    let a_topic = topic::content_words(a, &is_absolute_word);
    let b_topic = topic::content_words(b, &is_absolute_word);
    topic::jaccard(&a_topic, &b_topic) >= overlap_threshold
}
