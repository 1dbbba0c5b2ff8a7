use crate::types::{ChannelId, NodeId};

/// Errors raised by the channel graph data model.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("unknown channel: {channel}")]
    UnknownChannel { channel: ChannelId },

    #[error("node already exists: {node}")]
    DuplicateNode { node: NodeId },

    #[error("channel already exists: {channel}")]
    DuplicateChannel { channel: ChannelId },

    #[error("node {node} is not an endpoint of channel {channel}")]
    NotAnEndpoint { node: NodeId, channel: ChannelId },

    #[error("channel {channel} must lock a positive capacity")]
    ZeroCapacity { channel: ChannelId },

    #[error("channel {channel} balances overflow u64 capacity")]
    CapacityOverflow { channel: ChannelId },

    #[error("channel endpoints must differ: {node}")]
    SelfChannel { node: NodeId },

    #[error("insufficient balance on channel {channel}: available {available}, required {required}")]
    InsufficientBalance {
        channel: ChannelId,
        available: u64,
        required: u64,
    },

    #[error("invalid policy: {reason}")]
    InvalidPolicy { reason: String },
}
