/// One decay step.
///
/// ```text
/// decayed = max(floor, heat × (1 − rate))
/// ```
///
/// A node already below the floor keeps its heat: decay never raises heat.
pub fn decay(heat: f64, rate: f64, floor: f64) -> f64 {
    let decayed = (heat * (1.0 - rate)).max(floor);
    decayed.min(heat)
}

/// Move heat toward 1.0 by `amount` of the remaining gap.
pub fn boost(heat: f64, amount: f64) -> f64 {
    (heat + amount * (1.0 - heat)).clamp(0.0, 1.0)
}
