use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Per-direction fee and delay policy a channel endpoint charges for
/// forwarding a payment through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Flat surcharge in milli-satoshis added to every forwarded payment.
    pub base_fee_msat: u64,
    /// Fee charged as a fraction of the forwarded amount (e.g. 1e-6).
    pub proportional_fee: f64,
    /// Time-lock delta in blocks. Contributes a risk term to the route
    /// weight, not wall-clock time.
    pub time_lock_delta: u32,
}

impl Policy {
    /// Create a new policy.
    pub fn new(base_fee_msat: u64, proportional_fee: f64, time_lock_delta: u32) -> Self {
        Self {
            base_fee_msat,
            proportional_fee,
            time_lock_delta,
        }
    }

    /// A policy that charges nothing and adds no time-lock risk.
    pub fn free() -> Self {
        Self::new(0, 0.0, 0)
    }

    /// Fee for forwarding `amount` through this direction.
    ///
    /// `fee = base_fee_msat + floor(proportional_fee * amount)`.
    /// The proportional part is truncated toward zero; this rounding rule
    /// is fixed and tests depend on it.
    pub fn fee_for(&self, amount: u64) -> u64 {
        self.base_fee_msat + (self.proportional_fee * amount as f64) as u64
    }

    /// Validate that all fields are within acceptable ranges.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.proportional_fee.is_finite() || self.proportional_fee < 0.0 {
            return Err(GraphError::InvalidPolicy {
                reason: format!("proportional_fee out of range: {}", self.proportional_fee),
            });
        }
        Ok(())
    }
}

impl Default for Policy {
    /// The reference routing node's default policy: 1000 msat base fee,
    /// 1e-6 proportional fee, 144-block time-lock delta.
    fn default() -> Self {
        Self::new(1_000, 1e-6, 144)
    }
}
