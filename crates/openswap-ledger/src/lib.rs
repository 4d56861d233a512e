//! # openswap-ledger
//!
//! **The wallet ledger**: balance lookups and conserving transfers for the
//! OpenSwap exchange core.
//!
//! Every operation takes an explicit [`StoreTx`](openswap_store::StoreTx)
//! handle — there is no global session, and nothing here reaches committed
//! state directly. [`transfer_set`] is the only multi-leg primitive: it
//! applies every leg or none, so value is conserved across any settlement
//! built on it.

pub mod ledger;

pub use ledger::{balance, credit, debit, transfer_set, wallets_for};
