/// Energy every seed starts a pulse with.
pub const SEED_ENERGY: f64 = 1.0;
