//! # openswap-store
//!
//! **Transactional state store** for the OpenSwap exchange core.
//!
//! [`ExchangeStore`] owns the committed state (accounts, wallets, orders)
//! behind a version counter. [`StoreTx`] is the per-request transaction
//! handle: it carries a snapshot taken at `begin()`, stages every read and
//! write against that snapshot, and either installs the whole staged state
//! at `commit()` or discards it on drop.
//!
//! Serializability is enforced at commit time: if the committed version
//! advanced while the transaction ran, `commit()` fails with
//! `TransactionConflict` and nothing is applied. The caller owns any retry
//! policy.

pub mod store;
pub mod tx;

pub use store::ExchangeStore;
pub use tx::StoreTx;
