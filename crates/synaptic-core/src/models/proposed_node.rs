use serde::{Deserialize, Serialize};

use crate::graph::{fingerprint, NodeCategory};

/// A new memory proposed by the external synthesis step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedNode {
    /// Caller-chosen id. When absent the engine's id generator assigns one.
    #[serde(default)]
    pub id: Option<String>,
    pub category: NodeCategory,
    pub label: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl ProposedNode {
    pub fn new(category: NodeCategory, label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            category,
            label: label.into(),
            content: content.into(),
            embedding: None,
        }
    }

    /// Builder: set an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn fingerprint(&self) -> String {
        fingerprint(self.category, &self.label, &self.content)
    }
}
