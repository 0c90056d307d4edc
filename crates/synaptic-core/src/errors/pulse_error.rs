/// Pulse state-machine errors raised by the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error("pulse has an unresolved contradiction between {node_a} and {node_b}")]
    UnresolvedContradiction { node_a: String, node_b: String },

    #[error("winner {winner} is not part of the pending contradiction")]
    InvalidWinner { winner: String },

    #[error("no contradiction is pending on this pulse")]
    NothingToResolve,

    #[error("synthesis failed: {reason}")]
    SynthesisFailed { reason: String },
}
