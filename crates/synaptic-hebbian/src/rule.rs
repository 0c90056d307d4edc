/// `w + eta · joint · (1 − w)`, clamped to [0, 1].
pub fn reinforce(weight: f64, eta: f64, joint: f64) -> f64 {
    (weight + eta * joint * (1.0 - weight)).clamp(0.0, 1.0)
}

/// `w · (1 − eta_decay)`.
pub fn decay(weight: f64, eta_decay: f64) -> f64 {
    (weight * (1.0 - eta_decay)).clamp(0.0, 1.0)
}

/// Seed weight for a link created by co-firing.
pub fn seed_weight(eta: f64, joint: f64) -> f64 {
    (eta * joint).clamp(0.0, 1.0)
}
