use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementId(pub Uuid);

impl SettlementId {
    /// Create a new random settlement ID (UUID v7 — time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SettlementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SettlementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proof that a payment settled across every hop of its route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Settlement identifier.
    pub settlement_id: SettlementId,
    /// What the target received.
    pub amount_delivered: u64,
    /// What the source pushed into the first channel.
    pub amount_sent: u64,
    /// Fees pocketed by intermediate hops (`amount_sent - amount_delivered`).
    pub total_fees: u64,
    /// Number of hops the payment crossed.
    pub hop_count: usize,
    /// When the commit pass completed.
    pub settled_at: DateTime<Utc>,
}

/// The outcome of a settlement attempt. Both variants are expected
/// results, not faults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SettlementOutcome {
    /// Every hop could afford its obligation; balances were updated.
    Settled(SettlementReceipt),
    /// The first hop whose sender lacked liquidity; nothing was mutated.
    /// Callers may retry with an alternate route excluding that channel.
    InsufficientFunds { hop_index: usize },
}

impl SettlementOutcome {
    /// Returns true if the payment settled.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled(_))
    }

    /// The receipt, if the payment settled.
    pub fn receipt(&self) -> Option<&SettlementReceipt> {
        match self {
            Self::Settled(receipt) => Some(receipt),
            Self::InsufficientFunds { .. } => None,
        }
    }
}
