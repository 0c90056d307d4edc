//! Level-synchronous breadth-first spreading.
//!
//! Each node keeps only the strongest arrival (max, never sum). Since
//! [`propagate`](crate::propagation::propagate) is strictly decreasing along
//! a path, an arrival that does not beat the node's best so far can never
//! lead anywhere better, so only improving arrivals are expanded. Per-path
//! cycle guard keeps `path` a simple path.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use synaptic_core::constants::SEED_ENERGY;

use crate::index::ActivationIndex;
use crate::propagation::propagate;

/// Best arrival recorded for a node.
#[derive(Debug, Clone)]
pub struct Reached {
    pub energy: f64,
    pub depth: u32,
    pub path: Vec<NodeIndex>,
}

impl Reached {
    /// Tie-break: higher energy, then shallower, then smaller path.
    fn beats(&self, other: &Reached) -> bool {
        if self.energy != other.energy {
            return self.energy > other.energy;
        }
        if self.depth != other.depth {
            return self.depth < other.depth;
        }
        self.path < other.path
    }
}

/// Spread from `seeds` for at most `max_depth` hops.
pub fn spread(
    index: &ActivationIndex<'_>,
    seeds: &[NodeIndex],
    gamma: f64,
    theta: f64,
    max_depth: u32,
) -> HashMap<NodeIndex, Reached> {
    let mut best: HashMap<NodeIndex, Reached> = HashMap::new();
    let mut frontier: Vec<Reached> = Vec::new();

    for &seed in seeds {
        let state = Reached {
            energy: SEED_ENERGY,
            depth: 0,
            path: vec![seed],
        };
        best.insert(seed, state.clone());
        frontier.push(state);
    }

    for depth in 0..max_depth {
        let mut next: Vec<Reached> = Vec::new();

        for state in &frontier {
            let Some(&current) = state.path.last() else {
                continue;
            };

            for (target, weight) in index.outgoing(current) {
                if state.path.contains(&target) {
                    continue;
                }
                let Some(arrival) = propagate(state.energy, weight, gamma, theta) else {
                    continue;
                };

                let mut path = state.path.clone();
                path.push(target);
                let candidate = Reached {
                    energy: arrival,
                    depth: depth + 1,
                    path,
                };

                // Anything recorded so far is at most this deep, so an
                // arrival that does not beat it is dominated.
                let improves = best
                    .get(&target)
                    .map_or(true, |existing| candidate.beats(existing));
                if improves {
                    best.insert(target, candidate.clone());
                    next.push(candidate);
                }
            }
        }

        // Drop arrivals superseded later in the same level.
        next.retain(|state| {
            state
                .path
                .last()
                .and_then(|node| best.get(node))
                .is_some_and(|b| b.path == state.path)
        });
        next.sort_by(|a, b| {
            b.energy
                .partial_cmp(&a.energy)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.path.cmp(&b.path))
        });

        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    best
}
