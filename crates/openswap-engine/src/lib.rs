//! # openswap-engine
//!
//! **The matching engine** for the OpenSwap exchange core.
//!
//! Composes the wallet ledger and the order book to execute trades: it
//! validates a fill request against a resting order, computes the settlement
//! amounts, moves value across the four involved wallets, and reduces the
//! order — all inside one store transaction, so the wallet legs and the
//! quantity change commit together or not at all.
//!
//! The [`AccountRegistry`] collaborator seeds users and their wallets; the
//! engine itself never creates either.

pub mod engine;
pub mod registry;

pub use engine::{CreateOrderRequest, FillOrderRequest, MatchingEngine};
pub use registry::AccountRegistry;
