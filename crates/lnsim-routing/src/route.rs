use lnsim_core::{ChannelId, NodeId};
use serde::{Deserialize, Serialize};

/// One directed traversal of a channel within a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// The node pushing liquidity into the channel.
    pub source: NodeId,
    /// The node receiving it.
    pub target: NodeId,
    /// The channel being traversed.
    pub channel_id: ChannelId,
}

/// An ordered, loop-free sequence of hops from a payment source to its
/// target, in forward order: `hops[0].source` is the payer and
/// `hops[i].target == hops[i + 1].source`.
///
/// An empty route means source and target coincide; the payment is
/// trivially feasible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Ordered hops from source toward target.
    hops: Vec<Hop>,
    /// The amount the target must finally receive.
    pub amount: u64,
    /// The amount the source must send, fees included.
    pub amount_to_send: u64,
    /// Aggregate risk-adjusted cost of the route.
    pub weight: f64,
}

impl Route {
    /// Create a route from hops in forward order.
    pub fn new(hops: Vec<Hop>, amount: u64, amount_to_send: u64, weight: f64) -> Self {
        Self {
            hops,
            amount,
            amount_to_send,
            weight,
        }
    }

    /// The trivial route for a payment from a node to itself.
    pub fn empty(amount: u64) -> Self {
        Self::new(Vec::new(), amount, amount, 0.0)
    }

    /// The ordered hops.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of hops.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Returns true if the route has no hops (source == target).
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// The paying node, if the route has any hops.
    pub fn source(&self) -> Option<&NodeId> {
        self.hops.first().map(|h| &h.source)
    }

    /// The receiving node, if the route has any hops.
    pub fn target(&self) -> Option<&NodeId> {
        self.hops.last().map(|h| &h.target)
    }

    /// Total fees paid along the route as seen by the route finder.
    pub fn fee_total(&self) -> u64 {
        self.amount_to_send - self.amount
    }

    /// Returns true if `node` appears anywhere on the route.
    pub fn visits(&self, node: &NodeId) -> bool {
        self.hops
            .iter()
            .any(|h| h.source == *node || h.target == *node)
    }

    /// Every node on the route in forward order: the source, then the
    /// target of each hop.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.hops.len() + 1);
        if let Some(first) = self.hops.first() {
            nodes.push(first.source.clone());
        }
        nodes.extend(self.hops.iter().map(|h| h.target.clone()));
        nodes
    }
}
