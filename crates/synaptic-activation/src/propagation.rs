/// Energy arriving at the target of an edge, or `None` if the edge does
/// not fire.
///
/// ```text
/// propagated = energy × weight × gamma
/// fires      ⇔ propagated ≥ theta
/// activation = (propagated − theta) / (1 + (propagated − theta))
/// ```
///
/// The squash keeps activation in [0, 1) and flattens large overshoot, so
/// dense hubs cannot amplify without bound. Because the result is always
/// strictly below the source energy, energy decreases along every path.
pub fn propagate(energy: f64, weight: f64, gamma: f64, theta: f64) -> Option<f64> {
    let propagated = energy * weight * gamma;
    if propagated < theta {
        return None;
    }
    let overshoot = propagated - theta;
    let activation = overshoot / (1.0 + overshoot);
    // A zero-energy arrival carries nothing forward.
    (activation > 0.0).then_some(activation)
}

/// `energy · ((1 − heat_bias) + heat_bias · heat)`.
pub fn bias(energy: f64, heat: f64, heat_bias: f64) -> f64 {
    energy * ((1.0 - heat_bias) + heat_bias * heat)
}
