//! lnsim Core — data model for a payment-channel network.
//!
//! This crate provides:
//! - [`NodeId`] and [`ChannelId`] — opaque, stable identifiers.
//! - [`Policy`] — per-direction fee and time-lock parameters.
//! - [`Channel`] — a bidirectional channel with a fixed capacity split
//!   into two balances, one per endpoint.
//! - [`ChannelGraph`] — the directed-pair multigraph the routing and
//!   settlement layers operate on.
//! - [`fees::hop_cost`] — the pure fee/weight function shared by both.

pub mod channel;
pub mod error;
pub mod fees;
pub mod graph;
pub mod policy;
pub mod types;

// Re-exports for convenience.
pub use channel::Channel;
pub use error::GraphError;
pub use fees::{hop_cost, HopCost, RISK_FACTOR};
pub use graph::ChannelGraph;
pub use policy::Policy;
pub use types::{ChannelId, NodeId};
