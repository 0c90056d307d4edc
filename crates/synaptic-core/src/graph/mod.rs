pub mod category;
pub mod hyperedge;
pub mod node;
pub mod scalar;
pub mod store;
pub mod synapse;

pub use category::{NodeCategory, RelationKind};
pub use hyperedge::Hyperedge;
pub use node::{fingerprint, Node, NodeId};
pub use scalar::{Heat, Weight};
pub use store::Graph;
pub use synapse::Synapse;
