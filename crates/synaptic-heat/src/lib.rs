//! # synaptic-heat
//!
//! Heat is a node's recency/importance, independent of any one pulse's
//! activation energy. It decays a little after every pulse, gets boosted
//! when a node is used, and is pushed to the floor when a node loses a
//! contradiction.

pub mod engine;
pub mod formula;

pub use engine::{HeatManager, HeatReport};
