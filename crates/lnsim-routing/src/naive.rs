//! Fewest-hop baseline router.
//!
//! A breadth-first search for the shortest node path, then for each
//! consecutive node pair the incident channel with the lowest base fee.
//! Ignores route weight entirely; useful as a comparison baseline for
//! the Dijkstra finder.

use std::collections::{HashMap, VecDeque};

use lnsim_core::{hop_cost, ChannelGraph, NodeId};

use crate::error::RoutingError;
use crate::route::{Hop, Route};

/// Find a fewest-hop route from `source` to `target` delivering `amount`.
///
/// Returns `Ok(None)` when the target is unreachable. The route's amount
/// and weight are filled in with the same backward fee accumulation the
/// Dijkstra finder uses, so the two are directly comparable.
pub fn find_route(
    graph: &ChannelGraph,
    source: &NodeId,
    target: &NodeId,
    amount: u64,
    risk_factor: f64,
) -> Result<Option<Route>, RoutingError> {
    if amount == 0 {
        return Err(RoutingError::InvalidAmount { amount });
    }
    for node in [source, target] {
        if !graph.contains_node(node) {
            return Err(RoutingError::UnknownNode { node: node.clone() });
        }
    }
    if source == target {
        return Ok(Some(Route::empty(amount)));
    }

    let Some(node_path) = shortest_node_path(graph, source, target) else {
        tracing::debug!(%source, %target, "naive: no path found");
        return Ok(None);
    };

    // Pick the cheapest parallel channel (by base fee in the forward
    // direction, then by id for determinism) for each consecutive pair.
    let mut hops = Vec::with_capacity(node_path.len() - 1);
    for pair in node_path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let mut best: Option<(u64, Hop)> = None;
        for channel in graph.channels_of(from) {
            if !channel.is_endpoint(to) {
                continue;
            }
            let Ok(policy) = channel.policy_from(from) else {
                continue;
            };
            let candidate = (
                policy.base_fee_msat,
                Hop {
                    source: from.clone(),
                    target: to.clone(),
                    channel_id: channel.id.clone(),
                },
            );
            let better = match &best {
                None => true,
                Some((fee, hop)) => {
                    candidate.0 < *fee
                        || (candidate.0 == *fee && candidate.1.channel_id < hop.channel_id)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        // BFS only walks existing channels, so a pair without one is
        // unreachable here.
        match best {
            Some((_fee, hop)) => hops.push(hop),
            None => return Ok(None),
        }
    }

    // Backward fee accumulation over the chosen hops.
    let mut amount_to_send = amount;
    let mut weight = 0.0;
    for hop in hops.iter().rev() {
        let Ok(channel) = graph.channel(&hop.channel_id) else {
            continue;
        };
        let Ok(policy) = channel.policy_from(&hop.source) else {
            continue;
        };
        let cost = hop_cost(policy, amount_to_send, weight, risk_factor);
        amount_to_send = cost.amount_to_send;
        weight = cost.weight;
    }

    Ok(Some(Route::new(hops, amount, amount_to_send, weight)))
}

/// Unweighted BFS for the fewest-hop node path.
fn shortest_node_path(
    graph: &ChannelGraph,
    source: &NodeId,
    target: &NodeId,
) -> Option<Vec<NodeId>> {
    let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(source.clone());
    predecessor.insert(source.clone(), source.clone());

    while let Some(current) = queue.pop_front() {
        if current == *target {
            // Walk predecessors back to the source.
            let mut path = vec![current.clone()];
            let mut cursor = current;
            while cursor != *source {
                let prev = predecessor.get(&cursor)?.clone();
                path.push(prev.clone());
                cursor = prev;
            }
            path.reverse();
            return Some(path);
        }
        for channel in graph.channels_of(&current) {
            let Ok(next) = channel.other_endpoint(&current) else {
                continue;
            };
            if !predecessor.contains_key(next) {
                predecessor.insert(next.clone(), current.clone());
                queue.push_back(next.clone());
            }
        }
    }
    None
}
