use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::NodeCategory;
use super::scalar::Heat;

/// Node identifier. Stable across pulses.
pub type NodeId = String;

/// A unit of memory in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub category: NodeCategory,
    /// Short display label.
    pub label: String,
    /// Free-text content.
    #[serde(default)]
    pub content: String,
    /// Recency/importance, independent of any single pulse's energy.
    #[serde(default)]
    pub heat: Heat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
    /// Archived nodes are never seeds but can still be traversed.
    #[serde(default)]
    pub archived: bool,
    /// Optional embedding, used opportunistically for similarity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Node {
    /// Create a hot, unarchived node with no timestamps or embedding.
    pub fn new(
        id: impl Into<NodeId>,
        category: NodeCategory,
        label: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            content: content.into(),
            heat: Heat::default(),
            created_at: None,
            last_accessed: None,
            archived: false,
            embedding: None,
        }
    }

    /// Builder: set the initial heat.
    pub fn with_heat(mut self, heat: f64) -> Self {
        self.heat = Heat::new(heat);
        self
    }

    /// Builder: attach an embedding.
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Builder: mark as archived.
    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn heat(&self) -> f64 {
        self.heat.value()
    }

    /// Set heat, clamping to [0.0, 1.0].
    pub fn set_heat(&mut self, value: f64) {
        self.heat = Heat::new(value);
    }

    /// Label and content joined, for lexical matching.
    pub fn text(&self) -> String {
        if self.content.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.label, self.content)
        }
    }

    /// blake3 fingerprint of category, label and content.
    ///
    /// Two proposed memories with the same fingerprint are the same memory.
    pub fn fingerprint(&self) -> String {
        fingerprint(self.category, &self.label, &self.content)
    }
}

/// Fingerprint for a (category, label, content) triple. Case and surrounding
/// whitespace in the label are ignored.
pub fn fingerprint(category: NodeCategory, label: &str, content: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(category.as_str().as_bytes());
    hasher.update(&[0]);
    hasher.update(label.trim().to_lowercase().as_bytes());
    hasher.update(&[0]);
    hasher.update(content.trim().as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Identity equality: two nodes are equal if they have the same id.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
