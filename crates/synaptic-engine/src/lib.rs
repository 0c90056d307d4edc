//! # synaptic-engine
//!
//! Runs one query pulse end to end:
//! seeds → activation → contradiction check → context selection →
//! (external synthesis) → merge proposed memories → Hebbian learning →
//! heat → telemetry.
//!
//! Read-only phases work on `&Graph`. Everything that mutates is applied to
//! a working copy at commit and swapped in at the end, so an abandoned or
//! failed pulse leaves the graph as it was.

pub mod merge;
pub mod pulse;
pub mod session;

pub use merge::{merge_proposed, MergeOutcome};
pub use pulse::{PreparedPulse, PulseEngine, PulseOutcome, Resolution};
pub use session::{GraphSession, PulseGuard};
