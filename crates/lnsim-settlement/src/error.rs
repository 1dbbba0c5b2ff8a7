use lnsim_core::{ChannelId, GraphError, NodeId};

/// Settlement-layer errors.
///
/// Every variant here is a contract violation: the caller passed an
/// amount or a route that `find_route` could not have produced against
/// the current graph. Running out of liquidity on a hop is NOT an error;
/// it is reported as `SettlementOutcome::InsufficientFunds` with the
/// graph left untouched.
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    #[error("payment amount must be positive, got {amount}")]
    InvalidAmount { amount: u64 },

    #[error("route hop {hop_index} does not start where the previous hop ended")]
    BrokenChain { hop_index: usize },

    #[error("route references unknown channel {channel} at hop {hop_index}")]
    UnknownChannel {
        channel: ChannelId,
        hop_index: usize,
    },

    #[error("hop {hop_index} endpoints are not on channel {channel}")]
    NotOnChannel {
        channel: ChannelId,
        hop_index: usize,
    },

    #[error("route visits node {node} twice")]
    RepeatedNode { node: NodeId },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}
