pub mod activated_node;
pub mod contradiction;
pub mod proposed_node;
pub mod pruning_log;
pub mod selection;
pub mod telemetry_point;
pub mod weight_delta;

pub use activated_node::ActivatedNode;
pub use contradiction::{ContradictionRecord, ContradictionSource};
pub use proposed_node::ProposedNode;
pub use pruning_log::{PruningAction, PruningLog};
pub use selection::Selection;
pub use telemetry_point::TelemetryPoint;
pub use weight_delta::{DeltaKind, WeightDelta};
