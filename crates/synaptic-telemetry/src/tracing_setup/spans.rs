//! Span definitions per pulse phase.

/// Create a span covering one whole pulse.
#[macro_export]
macro_rules! pulse_span {
    ($query:expr, $seed_count:expr) => {
        tracing::info_span!("synaptic.pulse", query = %$query, seed_count = $seed_count)
    };
}

/// Create an activation span.
#[macro_export]
macro_rules! activation_span {
    ($seed_count:expr) => {
        tracing::info_span!("synaptic.activation", seed_count = $seed_count)
    };
}

/// Create a learning span.
#[macro_export]
macro_rules! learning_span {
    ($activated_count:expr) => {
        tracing::info_span!("synaptic.learning", activated_count = $activated_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PULSE: &str = "synaptic.pulse";
    pub const ACTIVATION: &str = "synaptic.activation";
    pub const LEARNING: &str = "synaptic.learning";
}
