//! Composite cognitive-health score.
//!
//! ```text
//! health = 0.4 · focus + 0.4 · stability + 0.2 · (1 − |2 · meanHeat − 1|)
//! ```
//!
//! The arousal term peaks at mean heat 0.5 and drops to 0 for a graph that
//! is entirely cold or entirely hot. The weights are fixed.

pub const FOCUS_WEIGHT: f64 = 0.4;
pub const STABILITY_WEIGHT: f64 = 0.4;
pub const AROUSAL_WEIGHT: f64 = 0.2;

/// Blend focus, stability and arousal into [0, 1].
pub fn cognitive_health(focus: f64, stability: f64, mean_heat: f64) -> f64 {
    let arousal = 1.0 - (2.0 * mean_heat - 1.0).abs();
    let health = FOCUS_WEIGHT * focus + STABILITY_WEIGHT * stability + AROUSAL_WEIGHT * arousal;
    if health.is_finite() {
        health.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((FOCUS_WEIGHT + STABILITY_WEIGHT + AROUSAL_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn balanced_arousal_is_best() {
        assert!((cognitive_health(1.0, 1.0, 0.5) - 1.0).abs() < 1e-12);
        assert!((cognitive_health(1.0, 1.0, 1.0) - 0.8).abs() < 1e-12);
        assert!((cognitive_health(1.0, 1.0, 0.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn nan_collapses_to_zero() {
        assert_eq!(cognitive_health(f64::NAN, 1.0, 0.5), 0.0);
    }
}
