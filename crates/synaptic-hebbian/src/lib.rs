//! # synaptic-hebbian
//!
//! "Nodes that fire together wire together." Every unordered pair of
//! co-activated nodes either strengthens the links between them, weakens
//! them when the co-firing was incidental, or gets a fresh link.
//!
//! Learning is staged: [`plan`] reads the graph and produces a
//! [`HebbianPlan`]; [`HebbianPlan::commit`] applies it in one step.

pub mod engine;
pub mod plan;
pub mod rule;

pub use engine::HebbianLearner;
pub use plan::{plan, HebbianPlan, PlannedChange};
