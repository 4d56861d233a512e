//! The shared committed state and the transaction entry point.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use openswap_types::{Account, Currency, OpenswapError, Order, OrderId, Result, UserId, Wallet};

use crate::tx::StoreTx;

/// The whole committed state of the exchange, replaced atomically at commit.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    pub(crate) version: u64,
    pub(crate) accounts: HashMap<UserId, Account>,
    /// Keyed by (user, currency); `BTreeMap` keeps per-user wallet listings
    /// in currency order.
    pub(crate) wallets: BTreeMap<(UserId, Currency), Wallet>,
    pub(crate) orders: HashMap<OrderId, Order>,
}

/// Shared handle to the committed exchange state.
///
/// Cloning is cheap; every clone points at the same state. All access goes
/// through [`StoreTx`] handles obtained from [`ExchangeStore::begin`].
#[derive(Debug, Clone, Default)]
pub struct ExchangeStore {
    shared: Arc<RwLock<StoreState>>,
}

impl ExchangeStore {
    /// Create an empty store at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a transaction: snapshot the committed state under a read lock.
    pub fn begin(&self) -> Result<StoreTx> {
        let guard = self
            .shared
            .read()
            .map_err(|_| OpenswapError::StorageFailure("state lock poisoned".to_string()))?;
        Ok(StoreTx::new(Arc::clone(&self.shared), guard.clone()))
    }

    /// The version of the currently committed state.
    pub fn committed_version(&self) -> Result<u64> {
        let guard = self
            .shared
            .read()
            .map_err(|_| OpenswapError::StorageFailure("state lock poisoned".to_string()))?;
        Ok(guard.version)
    }
}

#[cfg(test)]
mod tests {
    use openswap_types::Wallet;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn new_store_is_at_version_zero() {
        let store = ExchangeStore::new();
        assert_eq!(store.committed_version().unwrap(), 0);
    }

    #[test]
    fn commit_bumps_version() {
        let store = ExchangeStore::new();
        let mut tx = store.begin().unwrap();
        tx.upsert_wallet(Wallet::new(UserId(1), "BTC", Decimal::ONE));
        tx.commit().unwrap();
        assert_eq!(store.committed_version().unwrap(), 1);
    }

    #[test]
    fn clones_share_state() {
        let store = ExchangeStore::new();
        let other = store.clone();

        let mut tx = store.begin().unwrap();
        tx.upsert_wallet(Wallet::new(UserId(1), "BTC", Decimal::ONE));
        tx.commit().unwrap();

        let tx = other.begin().unwrap();
        assert!(tx.wallet(UserId(1), "BTC").is_some());
    }
}
