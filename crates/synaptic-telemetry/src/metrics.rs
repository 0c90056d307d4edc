//! Per-pulse metrics over the graph, the activated set and the Hebbian
//! deltas. Degenerate inputs give zeros, never NaN.

use std::collections::BTreeSet;

use synaptic_core::graph::Graph;
use synaptic_core::models::{ActivatedNode, TelemetryPoint, WeightDelta};

use crate::health;

/// Build the telemetry point for one pulse. Pure.
pub fn summarize(
    graph: &Graph,
    activated: &[ActivatedNode],
    deltas: &[WeightDelta],
    latency_ms: f64,
) -> TelemetryPoint {
    let heats: Vec<f64> = graph.nodes.values().map(|n| n.heat()).collect();
    let node_count = heats.len();
    let activated_count = activated
        .iter()
        .map(|n| n.node_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mean_heat = mean(&heats);
    let heat_entropy = entropy(&heats);
    let focus_score = focus(heat_entropy, &heats);
    let stability_score = if node_count == 0 {
        0.0
    } else {
        1.0 / (1.0 + 10.0 * variance(&heats, mean_heat))
    };
    let (mean_weight_delta, max_weight_delta) = plasticity(deltas);

    TelemetryPoint {
        node_count: node_count as u32,
        synapse_count: graph.synapse_count() as u32,
        activated_count: activated_count as u32,
        activation_pct: ratio(activated_count, node_count),
        mean_heat,
        heat_entropy,
        focus_score,
        mean_weight_delta,
        max_weight_delta,
        stability_score,
        graph_density: ratio(graph.synapse_count(), node_count),
        cognitive_health: if node_count == 0 {
            0.0
        } else {
            health::cognitive_health(focus_score, stability_score, mean_heat)
        },
        latency_ms: if latency_ms.is_finite() { latency_ms.max(0.0) } else { 0.0 },
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
fn variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// `−Σ pᵢ ln pᵢ` with `pᵢ = heatᵢ / Σheat`; zero-heat nodes contribute 0.
pub fn entropy(heats: &[f64]) -> f64 {
    let total: f64 = heats.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    heats
        .iter()
        .filter(|&&h| h > 0.0)
        .map(|&h| {
            let p = h / total;
            -p * p.ln()
        })
        .sum()
}

/// `1 − entropy / ln(N)`. A single hot node is fully focused; a graph with
/// no heat at all has no focus.
fn focus(entropy: f64, heats: &[f64]) -> f64 {
    let total: f64 = heats.iter().sum();
    if heats.is_empty() || total <= 0.0 {
        return 0.0;
    }
    if heats.len() == 1 {
        return 1.0;
    }
    (1.0 - entropy / (heats.len() as f64).ln()).clamp(0.0, 1.0)
}

/// Mean and max absolute weight change.
fn plasticity(deltas: &[WeightDelta]) -> (f64, f64) {
    if deltas.is_empty() {
        return (0.0, 0.0);
    }
    let magnitudes: Vec<f64> = deltas.iter().map(WeightDelta::magnitude).collect();
    let max = magnitudes.iter().copied().fold(0.0, f64::max);
    (mean(&magnitudes), max)
}
