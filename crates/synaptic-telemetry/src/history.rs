//! Bounded in-memory telemetry history.

use std::collections::VecDeque;

use synaptic_core::models::TelemetryPoint;

/// Ring of the most recent telemetry points. The oldest point is evicted
/// once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct TelemetryHistory {
    points: VecDeque<TelemetryPoint>,
    capacity: usize,
}

impl TelemetryHistory {
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: TelemetryPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn latest(&self) -> Option<&TelemetryPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TelemetryPoint> {
        self.points.iter()
    }

    /// Mean cognitive health over the retained points, 0.0 when empty.
    pub fn mean_health(&self) -> f64 {
        self.mean_of(|p| p.cognitive_health)
    }

    /// Mean latency over the retained points, 0.0 when empty.
    pub fn mean_latency_ms(&self) -> f64 {
        self.mean_of(|p| p.latency_ms)
    }

    /// Change in health between the oldest and newest retained points.
    pub fn health_trend(&self) -> f64 {
        match (self.points.front(), self.points.back()) {
            (Some(first), Some(last)) => last.cognitive_health - first.cognitive_health,
            _ => 0.0,
        }
    }

    fn mean_of(&self, f: impl Fn(&TelemetryPoint) -> f64) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(f).sum::<f64>() / self.points.len() as f64
    }
}

impl Default for TelemetryHistory {
    fn default() -> Self {
        Self::new(synaptic_core::config::defaults::DEFAULT_HISTORY_CAPACITY)
    }
}
