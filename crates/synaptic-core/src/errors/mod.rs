mod config_error;
mod graph_error;
mod pulse_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use pulse_error::PulseError;

/// Top-level error for the Synaptic engine.
#[derive(Debug, thiserror::Error)]
pub enum SynapticError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("pulse error: {0}")]
    Pulse(#[from] PulseError),

    #[error("invalid category: {tag}")]
    InvalidCategory { tag: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SynapticResult<T> = Result<T, SynapticError>;
