//! # synaptic-core
//!
//! Foundation crate for the Synaptic memory engine.
//! Defines the graph store, data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SynapticConfig;
pub use errors::{SynapticError, SynapticResult};
pub use graph::{Graph, Heat, Hyperedge, Node, NodeCategory, NodeId, RelationKind, Synapse, Weight};
pub use models::{ActivatedNode, ContradictionRecord, PruningLog, Selection, TelemetryPoint, WeightDelta};
