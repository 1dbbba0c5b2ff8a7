use std::collections::HashMap;

use lnsim_core::{fees, ChannelGraph, NodeId};

use crate::error::RoutingError;
use crate::priority_set::UpdatablePrioritySet;
use crate::route::{Hop, Route};

/// Configuration for the route finder.
#[derive(Debug, Clone)]
pub struct RouteFinderConfig {
    /// Maximum number of hops allowed in a returned route.
    pub max_hops: u16,
    /// Conversion factor from value-locked-per-block into weight units.
    pub risk_factor: f64,
}

impl Default for RouteFinderConfig {
    fn default() -> Self {
        Self {
            max_hops: 20,
            risk_factor: fees::RISK_FACTOR,
        }
    }
}

/// Per-node scratch state owned by a single search invocation.
///
/// Kept in a map private to the call, never on the graph itself, so
/// repeated or concurrent queries on the same graph cannot corrupt each
/// other and nothing needs resetting between calls.
#[derive(Debug, Clone)]
struct NodeState {
    /// What this node must receive so the target ends up with the
    /// requested amount.
    amount_needed: u64,
    /// Tentative risk-adjusted weight of the best known route.
    weight: f64,
    /// Hops from this node toward the target.
    path: Vec<Hop>,
    /// Number of hops on that path.
    depth: u16,
}

/// Finds cheapest risk-adjusted routes by running Dijkstra backward from
/// the payment target.
///
/// The search moves against the payment direction, asking at each popped
/// node "who can pay into it and at what cost", so that fees accumulate
/// exactly as each sender will experience them.
pub struct RouteFinder {
    config: RouteFinderConfig,
}

impl RouteFinder {
    /// Create a route finder with the given configuration.
    pub fn new(config: RouteFinderConfig) -> Self {
        Self { config }
    }

    /// Create a route finder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RouteFinderConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &RouteFinderConfig {
        &self.config
    }

    /// Find the cheapest route from `source` to `target` delivering
    /// `amount`, within the configured hop budget.
    ///
    /// Returns `Ok(None)` when the target is unreachable within
    /// `max_hops` — a normal outcome, not an error. A zero amount or an
    /// unknown endpoint is rejected before any traversal.
    pub fn find_route(
        &self,
        graph: &ChannelGraph,
        source: &NodeId,
        target: &NodeId,
        amount: u64,
    ) -> Result<Option<Route>, RoutingError> {
        self.validate(graph, source, target, amount)?;

        if source == target {
            return Ok(Some(Route::empty(amount)));
        }

        let states = self.search(graph, target, amount, Some(source));
        let route = self.route_for(&states, source, amount);
        if route.is_none() {
            tracing::debug!(%source, %target, amount, "no route found within hop budget");
        }
        Ok(route)
    }

    /// Run the search to exhaustion and return, for every node that can
    /// reach `target` within the hop budget, its best route.
    pub fn routes_to_target(
        &self,
        graph: &ChannelGraph,
        target: &NodeId,
        amount: u64,
    ) -> Result<HashMap<NodeId, Route>, RoutingError> {
        self.validate(graph, target, target, amount)?;

        let states = self.search(graph, target, amount, None);
        let mut routes = HashMap::new();
        for node in states.keys() {
            if node == target {
                continue;
            }
            if let Some(route) = self.route_for(&states, node, amount) {
                routes.insert(node.clone(), route);
            }
        }
        Ok(routes)
    }

    fn validate(
        &self,
        graph: &ChannelGraph,
        source: &NodeId,
        target: &NodeId,
        amount: u64,
    ) -> Result<(), RoutingError> {
        if amount == 0 {
            return Err(RoutingError::InvalidAmount { amount });
        }
        for node in [source, target] {
            if !graph.contains_node(node) {
                return Err(RoutingError::UnknownNode { node: node.clone() });
            }
        }
        Ok(())
    }

    /// Backward Dijkstra from `target`. When `stop_at` is given the loop
    /// terminates as soon as that node is popped: by the greedy-choice
    /// property its tentative values are final at that point.
    fn search(
        &self,
        graph: &ChannelGraph,
        target: &NodeId,
        amount: u64,
        stop_at: Option<&NodeId>,
    ) -> HashMap<NodeId, NodeState> {
        let mut states: HashMap<NodeId, NodeState> = HashMap::new();
        states.insert(
            target.clone(),
            NodeState {
                amount_needed: amount,
                weight: 0.0,
                path: Vec::new(),
                depth: 0,
            },
        );

        let mut queue = UpdatablePrioritySet::new();
        queue.upsert(target.clone(), 0.0);

        while let Some(receiver) = queue.pop_min() {
            if stop_at == Some(&receiver) {
                break;
            }
            // Cloned so states can be updated while relaxing neighbours.
            let Some(recv) = states.get(&receiver).cloned() else {
                continue;
            };

            for channel in graph.channels_of(&receiver) {
                let Ok(sender) = channel.other_endpoint(&receiver) else {
                    continue;
                };
                let Ok(policy) = channel.policy_from(sender) else {
                    continue;
                };

                let cost = lnsim_core::hop_cost(
                    policy,
                    recv.amount_needed,
                    recv.weight,
                    self.config.risk_factor,
                );
                let current = states
                    .get(sender)
                    .map(|s| s.weight)
                    .unwrap_or(f64::INFINITY);
                if cost.weight >= current {
                    continue;
                }
                // Never relax into a cycle.
                if recv
                    .path
                    .iter()
                    .any(|h| h.source == *sender || h.target == *sender)
                {
                    continue;
                }
                // Depth budget gates further expansion only; the state is
                // still updated for weight comparison, and over-budget
                // paths are rejected when the route is read out.
                if recv.depth != self.config.max_hops {
                    queue.upsert(sender.clone(), cost.weight);
                }
                let mut path = Vec::with_capacity(recv.path.len() + 1);
                path.push(Hop {
                    source: sender.clone(),
                    target: receiver.clone(),
                    channel_id: channel.id.clone(),
                });
                path.extend_from_slice(&recv.path);
                states.insert(
                    sender.clone(),
                    NodeState {
                        amount_needed: cost.amount_to_send,
                        weight: cost.weight,
                        path,
                        depth: recv.depth + 1,
                    },
                );
            }
        }

        states
    }

    /// Read a node's finalized state out as a route, if it has one within
    /// the hop budget.
    fn route_for(
        &self,
        states: &HashMap<NodeId, NodeState>,
        node: &NodeId,
        amount: u64,
    ) -> Option<Route> {
        let state = states.get(node)?;
        if state.path.is_empty() || state.path.len() > self.config.max_hops as usize {
            return None;
        }
        Some(Route::new(
            state.path.clone(),
            amount,
            state.amount_needed,
            state.weight,
        ))
    }
}
