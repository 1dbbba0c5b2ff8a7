use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::policy::Policy;
use crate::types::{ChannelId, NodeId};

/// A bidirectional payment channel between two nodes.
///
/// The total `capacity` is immutable once the channel exists; only the
/// split between `balance_a` and `balance_b` moves, and the two always
/// sum to the capacity. Each direction carries its own [`Policy`]:
/// `policy_a` governs traffic leaving `node_a` (the a→b direction),
/// `policy_b` traffic leaving `node_b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Stable channel identifier.
    pub id: ChannelId,
    /// First endpoint.
    pub node_a: NodeId,
    /// Second endpoint.
    pub node_b: NodeId,
    /// Total value locked in the channel.
    capacity: u64,
    /// Liquidity currently controlled by `node_a`.
    balance_a: u64,
    /// Liquidity currently controlled by `node_b`.
    balance_b: u64,
    /// Fee/delay policy for the a→b direction.
    pub policy_a: Policy,
    /// Fee/delay policy for the b→a direction.
    pub policy_b: Policy,
}

impl Channel {
    /// Create a channel. Capacity is derived as `balance_a + balance_b`
    /// and fixed from then on.
    pub fn new(
        id: ChannelId,
        node_a: NodeId,
        node_b: NodeId,
        balance_a: u64,
        balance_b: u64,
        policy_a: Policy,
        policy_b: Policy,
    ) -> Result<Self, GraphError> {
        if node_a == node_b {
            return Err(GraphError::SelfChannel { node: node_a });
        }
        let capacity = balance_a
            .checked_add(balance_b)
            .ok_or(GraphError::CapacityOverflow { channel: id.clone() })?;
        if capacity == 0 {
            return Err(GraphError::ZeroCapacity { channel: id });
        }
        policy_a.validate()?;
        policy_b.validate()?;
        Ok(Self {
            id,
            node_a,
            node_b,
            capacity,
            balance_a,
            balance_b,
            policy_a,
            policy_b,
        })
    }

    /// Total value locked in the channel.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Liquidity on `node_a`'s side.
    pub fn balance_a(&self) -> u64 {
        self.balance_a
    }

    /// Liquidity on `node_b`'s side.
    pub fn balance_b(&self) -> u64 {
        self.balance_b
    }

    /// Returns true if `node` is one of the channel's endpoints.
    pub fn is_endpoint(&self, node: &NodeId) -> bool {
        *node == self.node_a || *node == self.node_b
    }

    /// The endpoint opposite `node`.
    pub fn other_endpoint(&self, node: &NodeId) -> Result<&NodeId, GraphError> {
        if *node == self.node_a {
            Ok(&self.node_b)
        } else if *node == self.node_b {
            Ok(&self.node_a)
        } else {
            Err(GraphError::NotAnEndpoint {
                node: node.clone(),
                channel: self.id.clone(),
            })
        }
    }

    /// The policy governing traffic leaving `node` over this channel.
    pub fn policy_from(&self, node: &NodeId) -> Result<&Policy, GraphError> {
        if *node == self.node_a {
            Ok(&self.policy_a)
        } else if *node == self.node_b {
            Ok(&self.policy_b)
        } else {
            Err(GraphError::NotAnEndpoint {
                node: node.clone(),
                channel: self.id.clone(),
            })
        }
    }

    /// The liquidity `node` currently controls on this channel.
    pub fn balance_of(&self, node: &NodeId) -> Result<u64, GraphError> {
        if *node == self.node_a {
            Ok(self.balance_a)
        } else if *node == self.node_b {
            Ok(self.balance_b)
        } else {
            Err(GraphError::NotAnEndpoint {
                node: node.clone(),
                channel: self.id.clone(),
            })
        }
    }

    /// Move `amount` from `from`'s side to the opposite side.
    ///
    /// The same value is subtracted and added, so the capacity invariant
    /// holds unconditionally; the only failure mode is `from` not
    /// controlling enough liquidity.
    pub fn transfer(&mut self, from: &NodeId, amount: u64) -> Result<(), GraphError> {
        let available = self.balance_of(from)?;
        if available < amount {
            return Err(GraphError::InsufficientBalance {
                channel: self.id.clone(),
                available,
                required: amount,
            });
        }
        if *from == self.node_a {
            self.balance_a -= amount;
            self.balance_b += amount;
        } else {
            self.balance_b -= amount;
            self.balance_a += amount;
        }
        Ok(())
    }
}
