//! Polarity mismatch on a shared topic: negation words and antonym pairs.

use super::topic;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
    "won't", "can't", "cannot", "shouldn't", "mustn't", "nothing", "none",
];

/// Opposed word pairs. A text on one side and a text on the other flip
/// polarity just like a negation word does.
const ANTONYM_PAIRS: &[(&str, &str)] = &[
    ("enable", "disable"),
    ("enabled", "disabled"),
    ("allow", "deny"),
    ("allowed", "denied"),
    ("include", "exclude"),
    ("use", "avoid"),
    ("prefer", "avoid"),
    ("like", "dislike"),
    ("likes", "dislikes"),
    ("recommended", "discouraged"),
    ("required", "forbidden"),
    ("safe", "unsafe"),
    ("secure", "insecure"),
    ("correct", "incorrect"),
    ("valid", "invalid"),
    ("true", "false"),
    ("open", "closed"),
    ("active", "inactive"),
    ("available", "unavailable"),
];

fn is_polarity_word(word: &str) -> bool {
    NEGATORS.contains(&word)
        || ANTONYM_PAIRS
            .iter()
            .any(|(pos, neg)| *pos == word || *neg == word)
}

fn negated(words: &[String]) -> bool {
    words.iter().filter(|w| NEGATORS.contains(&w.as_str())).count() % 2 == 1
}

fn has(words: &[String], target: &str) -> bool {
    words.iter().any(|w| w == target)
}

fn antonym_flip(a: &[String], b: &[String]) -> bool {
    ANTONYM_PAIRS.iter().any(|(pos, neg)| {
        let forward = has(a, pos) && has(b, neg) && !has(a, neg) && !has(b, pos);
        let backward = has(a, neg) && has(b, pos) && !has(a, pos) && !has(b, neg);
        forward || backward
    })
}

/// The texts share a topic and exactly one polarity flip separates them.
///
/// "is not safe" vs "is unsafe" carries two flips and agrees.
pub fn conflicts(a: &str, b: &str, overlap_threshold: f64) -> bool {
    let a_words = topic::words(a);
    let b_words = topic::words(b);

    let flipped = (negated(&a_words) != negated(&b_words)) != antonym_flip(&a_words, &b_words);
    if !flipped {
        return false;
    }

    let a_topic = topic::content_words(a, &is_polarity_word);
    let b_topic = topic::content_words(b, &is_polarity_word);
    topic::jaccard(&a_topic, &b_topic) >= overlap_threshold
}
