use lnsim_core::NodeId;

/// Errors that can occur within the routing layer.
///
/// An unreachable target is not an error; `find_route` reports it as
/// `Ok(None)` and callers are expected to handle it (retry with a larger
/// hop budget, or abandon the payment).
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("payment amount must be positive, got {amount}")]
    InvalidAmount { amount: u64 },
}
