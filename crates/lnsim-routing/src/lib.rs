//! lnsim Routing — pathfinding over the payment-channel graph.
//!
//! This crate provides:
//! - [`RouteFinder`] — a backward Dijkstra search from the payment target,
//!   emulating the de-facto routing node's fee/delay weight semantics.
//! - [`UpdatablePrioritySet`] — the decrease-key priority queue backing it.
//! - [`Route`] and [`Hop`] — an ordered, loop-free sequence of directed
//!   channel traversals with the total amount and weight.
//! - [`naive`] — a fewest-hop baseline finder for comparison runs.

pub mod error;
pub mod finder;
pub mod naive;
pub mod priority_set;
pub mod route;

// Re-exports for convenience.
pub use error::RoutingError;
pub use finder::{RouteFinder, RouteFinderConfig};
pub use priority_set::UpdatablePrioritySet;
pub use route::{Hop, Route};
