use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Scalar health metrics for one completed pulse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TelemetryPoint {
    pub node_count: u32,
    pub synapse_count: u32,
    pub activated_count: u32,
    /// `|activated| / |nodes|`.
    pub activation_pct: f64,
    /// Mean node heat ("arousal").
    pub mean_heat: f64,
    /// Shannon entropy of the normalized heat distribution.
    pub heat_entropy: f64,
    /// `1 − entropy / ln(N)`; higher means more concentrated attention.
    pub focus_score: f64,
    /// Mean absolute Hebbian weight change ("plasticity").
    pub mean_weight_delta: f64,
    pub max_weight_delta: f64,
    /// `1 / (1 + 10 · variance(heat))`.
    pub stability_score: f64,
    /// `|synapses| / |nodes|`.
    pub graph_density: f64,
    pub cognitive_health: f64,
    pub latency_ms: f64,
}
