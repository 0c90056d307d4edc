use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a contradiction was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionSource {
    /// A synapse tagged as a contradiction joins the pair.
    ExplicitRelation,
    /// "always" vs "never" on the same topic.
    AbsoluteStatement,
    /// Same topic, opposite polarity (negation or antonym).
    Negation,
}

/// Two simultaneously active nodes that oppose each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContradictionRecord {
    pub node_a: String,
    pub node_b: String,
    pub description: String,
    pub source: ContradictionSource,
    /// Sum of the pair's energies, used to rank records.
    pub combined_energy: f64,
}

impl ContradictionRecord {
    /// Whether `id` is one side of this contradiction.
    pub fn involves(&self, id: &str) -> bool {
        self.node_a == id || self.node_b == id
    }

    /// The side that is not `id`, if `id` is part of the record.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.node_a == id {
            Some(&self.node_b)
        } else if self.node_b == id {
            Some(&self.node_a)
        } else {
            None
        }
    }
}
