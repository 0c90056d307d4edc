//! # synaptic-selection
//!
//! Picks the context for one query out of the activated set with Maximal
//! Marginal Relevance: relevant to the query, not redundant with what was
//! already picked. Every candidate gets a trace entry saying why it was kept
//! or dropped.

pub mod engine;
pub mod mmr;
pub mod redundancy;
pub mod relevance;

pub use engine::ContextSelector;
