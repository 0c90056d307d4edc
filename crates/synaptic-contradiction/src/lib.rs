//! # synaptic-contradiction
//!
//! Finds pairs of simultaneously active memories that oppose each other.
//! A contradiction synapse is authoritative; the textual heuristics only
//! run for pairs without one.

pub mod detection;
pub mod engine;

pub use engine::{detect, ContradictionDetector};
