use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::errors::SynapticError;

/// Closed set of memory categories.
///
/// Unrecognized tags in loaded data land in [`NodeCategory::Unknown`]
/// instead of failing the whole graph load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Project,
    Document,
    Contact,
    Fact,
    Concept,
    Event,
    Task,
    Preference,
    #[serde(other)]
    Unknown,
}

impl NodeCategory {
    /// Total number of categories, including `Unknown`.
    pub const COUNT: usize = 9;

    /// All variants for iteration.
    pub const ALL: [NodeCategory; 9] = [
        Self::Project,
        Self::Document,
        Self::Contact,
        Self::Fact,
        Self::Concept,
        Self::Event,
        Self::Task,
        Self::Preference,
        Self::Unknown,
    ];

    /// Lenient parse: unrecognized tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Document => "document",
            Self::Contact => "contact",
            Self::Fact => "fact",
            Self::Concept => "concept",
            Self::Event => "event",
            Self::Task => "task",
            Self::Preference => "preference",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse, for validating tags at the data-model boundary.
impl FromStr for NodeCategory {
    type Err = SynapticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| SynapticError::InvalidCategory { tag: s.to_string() })
    }
}

/// Relation carried by a synapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Plain association. Learned links are always associations.
    #[default]
    Association,
    /// The endpoints are semantically opposed.
    Contradiction,
    /// The target was inferred from the source.
    Inference,
    #[serde(other)]
    Unknown,
}

impl RelationKind {
    pub fn is_contradiction(self) -> bool {
        matches!(self, Self::Contradiction)
    }
}
