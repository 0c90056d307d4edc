//! # synaptic-activation
//!
//! Spreading activation over the memory graph: energy flows from seed nodes
//! along weighted synapses, squashed and thresholded per hop, keeping the
//! strongest path to every node.

pub mod engine;
pub mod index;
pub mod propagation;
pub mod spread;

pub use engine::{activate, apply_budget, sort_activated, ActivationEngine};
pub use propagation::{bias, propagate};
