//! lnsim Settlement — atomic application of a payment to channel state.
//!
//! This crate provides:
//! - [`engine::settle`] — the two-pass check-then-commit balance update:
//!   either the whole route settles or none of it does.
//! - [`engine::required_amounts`] — backward fee accumulation over a
//!   chosen route, recomputed from live graph policies.
//! - [`SettlementOutcome`] and [`SettlementReceipt`] — the expected
//!   results of a settlement attempt.

pub mod engine;
pub mod error;
pub mod types;

// Re-exports for convenience.
pub use engine::{required_amounts, settle};
pub use error::SettlementError;
pub use types::{SettlementId, SettlementOutcome, SettlementReceipt};
