//! # synaptic-telemetry
//!
//! Read-only health metrics for each pulse, a bounded history of them, and
//! the `tracing` subscriber setup shared by the workspace.

pub mod health;
pub mod history;
pub mod metrics;
pub mod tracing_setup;

pub use health::cognitive_health;
pub use history::TelemetryHistory;
pub use metrics::summarize;
