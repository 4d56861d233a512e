//! # openswap-book
//!
//! **The order book** for the OpenSwap exchange core: the set of resting
//! (unfilled) orders, with counter-party discovery and fill-driven eviction.
//!
//! Like the ledger, every operation takes an explicit
//! [`StoreTx`](openswap_store::StoreTx) handle. The book never touches a
//! wallet: quantity bookkeeping here, value movement in the ledger, and the
//! engine commits both as one transaction.

pub mod book;

pub use book::{get, insert, list_matching, orders_for, reduce_remaining, remove};
