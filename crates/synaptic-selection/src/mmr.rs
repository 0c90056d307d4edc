//! Greedy Maximal Marginal Relevance.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use synaptic_core::config::SelectionConfig;
use synaptic_core::graph::{Graph, NodeCategory};
use synaptic_core::models::{ActivatedNode, PruningAction, PruningLog, Selection};

use crate::redundancy::{self, Profile};
use crate::relevance;

struct Candidate<'a> {
    /// Position in the activation output.
    rank: usize,
    node: &'a ActivatedNode,
    profile: Profile<'a>,
    relevance: f64,
}

/// `λ · relevance − (1 − λ) · redundancy`.
pub fn mmr_score(lambda: f64, relevance: f64, redundancy: f64) -> f64 {
    lambda * relevance - (1.0 - lambda) * redundancy
}

/// Select up to `k` nodes from `activated` for `query`.
pub fn select(
    graph: &Graph,
    activated: &[ActivatedNode],
    query: &str,
    k: usize,
    config: &SelectionConfig,
) -> Selection {
    let query_terms = relevance::tokenize(query);
    let candidates: Vec<Candidate<'_>> = activated
        .iter()
        .enumerate()
        .map(|(rank, node)| candidate(graph, rank, node, &query_terms, config))
        .collect();

    if config.enabled {
        greedy(candidates, k, config)
    } else {
        top_k(candidates, k)
    }
}

fn candidate<'a>(
    graph: &'a Graph,
    rank: usize,
    node: &'a ActivatedNode,
    query_terms: &BTreeSet<String>,
    config: &SelectionConfig,
) -> Candidate<'a> {
    let (profile, terms) = match graph.node(&node.node_id) {
        Some(n) => (Profile::of(n), relevance::tokenize(&n.text())),
        None => (
            Profile {
                category: NodeCategory::Unknown,
                embedding: None,
            },
            BTreeSet::new(),
        ),
    };
    Candidate {
        rank,
        node,
        profile,
        relevance: relevance::relevance(query_terms, &terms, config.relevance_floor),
    }
}

fn greedy(mut pool: Vec<Candidate<'_>>, k: usize, config: &SelectionConfig) -> Selection {
    let lambda = config.mmr_lambda;
    let mut selection = Selection::default();
    let mut chosen: Vec<Profile<'_>> = Vec::new();
    let mut step = 0u32;

    while selection.selected.len() < k && !pool.is_empty() {
        step += 1;
        let scored: Vec<(f64, f64)> = pool
            .iter()
            .map(|c| {
                let red = redundancy::redundancy(&c.profile, &chosen, config);
                (red, mmr_score(lambda, c.relevance, red))
            })
            .collect();

        let best = (0..pool.len())
            .max_by(|&i, &j| compare(&pool[i], scored[i].1, &pool[j], scored[j].1))
            .unwrap_or(0);

        let winner = pool.remove(best);
        let (red, score) = scored[best];
        selection.trace.push(PruningLog {
            step,
            node_id: winner.node.node_id.clone(),
            relevance: winner.relevance,
            redundancy: red,
            score,
            action: PruningAction::Selected,
            reason: format!("best marginal relevance in round {step}"),
        });
        chosen.push(winner.profile);
        selection.selected.push(winner.node.clone());
    }

    for c in pool {
        let red = redundancy::redundancy(&c.profile, &chosen, config);
        selection.trace.push(PruningLog {
            step,
            node_id: c.node.node_id.clone(),
            relevance: c.relevance,
            redundancy: red,
            score: mmr_score(lambda, c.relevance, red),
            action: PruningAction::Pruned,
            reason: format!("context full at {k}"),
        });
    }
    selection
}

/// Orders candidates so that the greater one wins a round: higher score,
/// then higher biased energy, then earlier activation rank.
fn compare(a: &Candidate<'_>, score_a: f64, b: &Candidate<'_>, score_b: f64) -> Ordering {
    score_a
        .partial_cmp(&score_b)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.node
                .biased_energy
                .partial_cmp(&b.node.biased_energy)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| b.rank.cmp(&a.rank))
}

fn top_k(mut pool: Vec<Candidate<'_>>, k: usize) -> Selection {
    // Stable: equal energies keep activation order.
    pool.sort_by(|a, b| {
        b.node
            .biased_energy
            .partial_cmp(&a.node.biased_energy)
            .unwrap_or(Ordering::Equal)
    });

    let mut selection = Selection::default();
    let kept = k.min(pool.len());
    for (i, c) in pool.into_iter().enumerate() {
        let keep = i < kept;
        selection.trace.push(PruningLog {
            step: if keep { i as u32 + 1 } else { kept as u32 },
            node_id: c.node.node_id.clone(),
            relevance: c.relevance,
            redundancy: 0.0,
            score: c.node.biased_energy,
            action: if keep {
                PruningAction::Selected
            } else {
                PruningAction::Pruned
            },
            reason: if keep {
                "pruning disabled: top-k by biased energy".to_string()
            } else {
                format!("pruning disabled: beyond top {k}")
            },
        });
        if keep {
            selection.selected.push(c.node.clone());
        }
    }
    selection
}
