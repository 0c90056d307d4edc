use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use synaptic_core::errors::GraphError;
use synaptic_core::graph::{Graph, Node, NodeId};
use synaptic_core::models::ProposedNode;
use synaptic_core::traits::{AuditEvent, IAuditSink, IIdGenerator};

/// Where a proposed memory ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub node_id: NodeId,
    /// False when it matched an existing node by fingerprint.
    pub created: bool,
}

/// Merge proposed memories into `graph`.
///
/// A proposal whose fingerprint matches an existing node (or an earlier
/// proposal in the same batch) folds into that node and is reported to
/// `audit`. Otherwise a node is created with the proposal's id or a fresh
/// one from `ids`. An explicit id that is already taken by a different
/// memory is an error.
pub fn merge_proposed(
    graph: &mut Graph,
    proposed: Vec<ProposedNode>,
    ids: &dyn IIdGenerator,
    audit: &dyn IAuditSink,
    now: DateTime<Utc>,
) -> Result<Vec<MergeOutcome>, GraphError> {
    let mut by_fingerprint: HashMap<String, NodeId> = graph
        .nodes
        .values()
        .map(|n| (n.fingerprint(), n.id.clone()))
        .collect();

    let mut outcomes = Vec::with_capacity(proposed.len());
    for proposal in proposed {
        let fingerprint = proposal.fingerprint();
        if let Some(existing) = by_fingerprint.get(&fingerprint) {
            audit.record(AuditEvent::MergedDuplicate {
                proposed_label: proposal.label.clone(),
                existing_id: existing.clone(),
            });
            if let Some(node) = graph.node_mut(existing) {
                node.last_accessed = Some(now);
                if node.embedding.is_none() {
                    node.embedding = proposal.embedding;
                }
            }
            outcomes.push(MergeOutcome {
                node_id: existing.clone(),
                created: false,
            });
            continue;
        }

        let id = match proposal.id {
            Some(id) => id,
            None => fresh_id(graph, ids),
        };
        let mut node = Node::new(id.clone(), proposal.category, proposal.label, proposal.content);
        node.created_at = Some(now);
        node.last_accessed = Some(now);
        node.embedding = proposal.embedding;
        graph.insert_node(node)?;

        by_fingerprint.insert(fingerprint, id.clone());
        outcomes.push(MergeOutcome {
            node_id: id,
            created: true,
        });
    }
    Ok(outcomes)
}

/// Next generated id not already in the graph.
fn fresh_id(graph: &Graph, ids: &dyn IIdGenerator) -> NodeId {
    loop {
        let id = ids.next_id();
        if !graph.contains(&id) {
            return id;
        }
    }
}
