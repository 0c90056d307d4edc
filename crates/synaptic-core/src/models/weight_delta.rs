use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What happened to a synapse during Hebbian learning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeltaKind {
    /// Strengthened by meaningful co-firing.
    Reinforced,
    /// Weakened by incidental co-occurrence.
    Decayed,
    /// Newly created link.
    Created,
}

/// Applied change to one synapse weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightDelta {
    pub source: String,
    pub target: String,
    pub before: f64,
    pub after: f64,
    pub kind: DeltaKind,
}

impl WeightDelta {
    /// Signed change.
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }

    /// Absolute change, used for plasticity telemetry.
    pub fn magnitude(&self) -> f64 {
        self.delta().abs()
    }
}
