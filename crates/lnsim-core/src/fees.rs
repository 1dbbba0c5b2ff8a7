use crate::policy::Policy;

/// Default conversion factor from value-locked-per-block into a cost
/// comparable with fees: 15 per billion, the reference routing node's
/// risk factor.
pub const RISK_FACTOR: f64 = 15.0 / 1_000_000_000.0;

/// The cost of traversing one directed channel, as seen from the sender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopCost {
    /// What the sender must push into the channel so the receiver ends up
    /// with the amount it needs.
    pub amount_to_send: u64,
    /// Accumulated risk-adjusted route weight up to and including this hop.
    pub weight: f64,
}

/// Compute the forward fee and risk-adjusted weight contributed by one
/// directed channel traversal.
///
/// `amount` is what the receiving side of the hop must end up with and
/// `accumulated_weight` the weight of the partial route behind it. The
/// new weight adds the hop fee plus a risk term charging `amount` for
/// being locked for `time_lock_delta` blocks.
///
/// Pure function; never fails for finite non-negative inputs.
pub fn hop_cost(policy: &Policy, amount: u64, accumulated_weight: f64, risk_factor: f64) -> HopCost {
    let fee = policy.fee_for(amount);
    let risk = amount as f64 * policy.time_lock_delta as f64 * risk_factor;
    HopCost {
        amount_to_send: amount + fee,
        weight: accumulated_weight + risk + fee as f64,
    }
}
