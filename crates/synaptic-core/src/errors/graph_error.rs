/// Graph store structural errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("synapse {source_id} -> {target_id} references missing node {missing}")]
    MissingEndpoint {
        source_id: String,
        target_id: String,
        missing: String,
    },

    #[error("synapse {source_id} -> {target_id} changed since learning was planned")]
    StaleSynapse { source_id: String, target_id: String },

    #[error("self-loop synapse rejected on node {id}")]
    SelfLoop { id: String },

    #[error("invalid hyperedge {name}: {reason}")]
    InvalidHyperedge { name: String, reason: String },
}
