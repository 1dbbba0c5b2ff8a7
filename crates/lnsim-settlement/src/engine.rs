use std::collections::HashSet;

use chrono::Utc;
use lnsim_core::{ChannelGraph, NodeId};
use lnsim_routing::Route;

use crate::error::SettlementError;
use crate::types::{SettlementId, SettlementOutcome, SettlementReceipt};

/// Compute, for each hop, the total amount its sender must forward so
/// the target ends up with `amount`.
///
/// Walks the route backward: the final hop delivers exactly `amount`,
/// and each earlier sender covers what the next hop forwards plus the
/// fee that hop's sender charges for forwarding it. Fees are recomputed
/// from the live graph policies on purpose — the route may have gone
/// stale between discovery and application, and numbers baked into it
/// are never trusted.
pub fn required_amounts(
    graph: &ChannelGraph,
    route: &Route,
    amount: u64,
) -> Result<Vec<u64>, SettlementError> {
    let hops = route.hops();
    let mut required = vec![0u64; hops.len()];
    let mut acc = amount;
    for (i, hop) in hops.iter().enumerate().rev() {
        let channel = graph.channel(&hop.channel_id)?;
        let policy = channel.policy_from(&hop.source)?;
        required[i] = acc;
        if i > 0 {
            acc += policy.fee_for(acc);
        }
    }
    Ok(required)
}

/// Atomically apply a payment of `amount` along `route`.
///
/// Two passes over the route: a read-only feasibility pass confirming
/// every hop's sender controls enough liquidity, then a commit pass
/// moving the balances. If any hop fails the check, the graph is left
/// bit-identical to before the call and the failing hop index is
/// reported — there is no partial settlement, ever.
///
/// A malformed route (hops that don't chain, unknown channels, a
/// repeated node) is a contract violation between the route finder and
/// this function, reported as a fatal [`SettlementError`].
pub fn settle(
    graph: &mut ChannelGraph,
    amount: u64,
    route: &Route,
) -> Result<SettlementOutcome, SettlementError> {
    if amount == 0 {
        return Err(SettlementError::InvalidAmount { amount });
    }
    validate_route(graph, route)?;

    if route.is_empty() {
        // Source and target coincide; nothing moves.
        return Ok(SettlementOutcome::Settled(receipt(amount, amount, 0)));
    }

    let required = required_amounts(graph, route, amount)?;

    // Feasibility pass: read-only, stops at the first hop that cannot
    // afford its obligation.
    for (i, hop) in route.hops().iter().enumerate() {
        let channel = graph.channel(&hop.channel_id)?;
        let available = channel.balance_of(&hop.source)?;
        if available < required[i] {
            tracing::debug!(
                hop_index = i,
                channel = %hop.channel_id,
                sender = %hop.source,
                available,
                required = required[i],
                "settlement infeasible"
            );
            return Ok(SettlementOutcome::InsufficientFunds { hop_index: i });
        }
    }

    // Commit pass: the same value leaves the sender's side and lands on
    // the receiver's, so capacity conservation holds at every hop.
    for (i, hop) in route.hops().iter().enumerate() {
        graph.channel_mut(&hop.channel_id)?.transfer(&hop.source, required[i])?;
    }

    let amount_sent = required[0];
    tracing::info!(
        amount,
        amount_sent,
        hops = route.hop_count(),
        "payment settled"
    );
    Ok(SettlementOutcome::Settled(receipt(
        amount,
        amount_sent,
        route.hop_count(),
    )))
}

fn receipt(amount_delivered: u64, amount_sent: u64, hop_count: usize) -> SettlementReceipt {
    SettlementReceipt {
        settlement_id: SettlementId::new(),
        amount_delivered,
        amount_sent,
        total_fees: amount_sent - amount_delivered,
        hop_count,
        settled_at: Utc::now(),
    }
}

/// Reject routes `find_route` could not have produced against this
/// graph: hops must chain, every channel must exist with the hop's
/// endpoints on it, and no node may appear twice.
fn validate_route(graph: &ChannelGraph, route: &Route) -> Result<(), SettlementError> {
    let hops = route.hops();
    let mut seen: HashSet<&NodeId> = HashSet::new();

    for (i, hop) in hops.iter().enumerate() {
        if i > 0 && hops[i - 1].target != hop.source {
            return Err(SettlementError::BrokenChain { hop_index: i });
        }
        let channel = graph
            .channel(&hop.channel_id)
            .map_err(|_| SettlementError::UnknownChannel {
                channel: hop.channel_id.clone(),
                hop_index: i,
            })?;
        if !channel.is_endpoint(&hop.source) || !channel.is_endpoint(&hop.target) {
            return Err(SettlementError::NotOnChannel {
                channel: hop.channel_id.clone(),
                hop_index: i,
            });
        }
        if !seen.insert(&hop.source) {
            return Err(SettlementError::RepeatedNode {
                node: hop.source.clone(),
            });
        }
    }
    if let Some(last) = hops.last() {
        if seen.contains(&last.target) {
            return Err(SettlementError::RepeatedNode {
                node: last.target.clone(),
            });
        }
    }
    Ok(())
}
