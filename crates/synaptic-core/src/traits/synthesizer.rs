use crate::errors::SynapticResult;
use crate::graph::Graph;
use crate::models::{ActivatedNode, ProposedNode};

/// External answer synthesis. Runs between selection and learning and may
/// propose new memories to merge into the graph.
pub trait ISynthesizer {
    fn synthesize(
        &self,
        query: &str,
        context: &[ActivatedNode],
        graph: &Graph,
    ) -> SynapticResult<Vec<ProposedNode>>;
}

/// Synthesizer that proposes nothing. Used when the caller handles
/// synthesis out of band.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSynthesizer;

impl ISynthesizer for NoOpSynthesizer {
    fn synthesize(
        &self,
        _query: &str,
        _context: &[ActivatedNode],
        _graph: &Graph,
    ) -> SynapticResult<Vec<ProposedNode>> {
        Ok(Vec::new())
    }
}
