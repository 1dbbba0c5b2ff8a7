use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::GraphError;
use crate::policy::Policy;
use crate::types::{ChannelId, NodeId};

/// The payment-channel network as a directed-pair multigraph.
///
/// Two nodes may share several channels; every channel stores one policy
/// and one balance per direction. Route queries borrow the graph shared
/// (`&ChannelGraph`), settlement borrows it exclusively
/// (`&mut ChannelGraph`), so a search can never observe a half-committed
/// payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelGraph {
    /// Channels keyed by id.
    channels: HashMap<ChannelId, Channel>,
    /// Incident channel ids per node, in insertion order.
    adjacency: HashMap<NodeId, Vec<ChannelId>>,
    /// Sequence for auto-assigned channel ids.
    channel_seq: u64,
}

impl ChannelGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no channels. Adding an existing node is an error.
    pub fn add_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNode { node });
        }
        self.adjacency.insert(node, Vec::new());
        Ok(())
    }

    /// Add a channel with an explicit id between two existing nodes.
    ///
    /// Capacity is derived as `balance_a + balance_b` and is immutable
    /// afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn add_channel(
        &mut self,
        id: ChannelId,
        node_a: NodeId,
        node_b: NodeId,
        balance_a: u64,
        balance_b: u64,
        policy_a: Policy,
        policy_b: Policy,
    ) -> Result<(), GraphError> {
        if self.channels.contains_key(&id) {
            return Err(GraphError::DuplicateChannel { channel: id });
        }
        for node in [&node_a, &node_b] {
            if !self.adjacency.contains_key(node) {
                return Err(GraphError::UnknownNode { node: node.clone() });
            }
        }
        let channel = Channel::new(
            id.clone(),
            node_a.clone(),
            node_b.clone(),
            balance_a,
            balance_b,
            policy_a,
            policy_b,
        )?;
        tracing::debug!(
            channel = %id,
            %node_a,
            %node_b,
            capacity = channel.capacity(),
            "adding channel"
        );
        self.adjacency.entry(node_a).or_default().push(id.clone());
        self.adjacency.entry(node_b).or_default().push(id.clone());
        self.channels.insert(id, channel);
        Ok(())
    }

    /// Add a channel with an auto-assigned sequential id. Returns the id.
    pub fn open_channel(
        &mut self,
        node_a: NodeId,
        node_b: NodeId,
        balance_a: u64,
        balance_b: u64,
        policy_a: Policy,
        policy_b: Policy,
    ) -> Result<ChannelId, GraphError> {
        self.channel_seq += 1;
        let id = ChannelId::new(format!("chan-{}", self.channel_seq));
        self.add_channel(id.clone(), node_a, node_b, balance_a, balance_b, policy_a, policy_b)?;
        Ok(id)
    }

    /// Returns true if the node exists in the graph.
    pub fn contains_node(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Look up a channel by id.
    pub fn channel(&self, id: &ChannelId) -> Result<&Channel, GraphError> {
        self.channels
            .get(id)
            .ok_or_else(|| GraphError::UnknownChannel { channel: id.clone() })
    }

    /// Look up a channel by id, mutably.
    pub fn channel_mut(&mut self, id: &ChannelId) -> Result<&mut Channel, GraphError> {
        self.channels
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownChannel { channel: id.clone() })
    }

    /// The channels incident to `node`, in insertion order.
    pub fn channels_of(&self, node: &NodeId) -> impl Iterator<Item = &Channel> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(|id| self.channels.get(id))
    }

    /// All node ids in the graph.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// All channels in the graph.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.values()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Sum of the liquidity `node` controls across all its channels.
    pub fn node_balance(&self, node: &NodeId) -> Result<u64, GraphError> {
        if !self.contains_node(node) {
            return Err(GraphError::UnknownNode { node: node.clone() });
        }
        let mut total = 0u64;
        for channel in self.channels_of(node) {
            total += channel.balance_of(node)?;
        }
        Ok(total)
    }

    /// Sum of all channel capacities.
    pub fn total_capacity(&self) -> u64 {
        self.channels.values().map(|c| c.capacity()).sum()
    }
}
