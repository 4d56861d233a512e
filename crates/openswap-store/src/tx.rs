//! The per-request transaction handle.
//!
//! Every read and staged write goes through a `StoreTx`. Nothing touches the
//! committed state until `commit()`, which re-validates the version under
//! the write lock — reads performed inside the transaction are only trusted
//! if no other transaction committed in between.

use std::sync::{Arc, RwLock};

use openswap_types::{Account, Order, OrderId, OpenswapError, Result, UserId, Wallet};

use crate::store::StoreState;

/// Snapshot-isolated transaction over the exchange state.
///
/// Dropping an uncommitted `StoreTx` discards every staged write.
#[derive(Debug)]
pub struct StoreTx {
    shared: Arc<RwLock<StoreState>>,
    base_version: u64,
    state: StoreState,
}

impl StoreTx {
    pub(crate) fn new(shared: Arc<RwLock<StoreState>>, state: StoreState) -> Self {
        let base_version = state.version;
        Self {
            shared,
            base_version,
            state,
        }
    }

    /// The committed version this transaction is based on.
    #[must_use]
    pub fn base_version(&self) -> u64 {
        self.base_version
    }

    // =================================================================
    // Accounts
    // =================================================================

    #[must_use]
    pub fn account(&self, user_id: UserId) -> Option<&Account> {
        self.state.accounts.get(&user_id)
    }

    pub fn insert_account(&mut self, account: Account) {
        self.state.accounts.insert(account.user_id, account);
    }

    // =================================================================
    // Wallets
    // =================================================================

    #[must_use]
    pub fn wallet(&self, user_id: UserId, currency: &str) -> Option<&Wallet> {
        self.state.wallets.get(&(user_id, currency.to_string()))
    }

    pub fn upsert_wallet(&mut self, wallet: Wallet) {
        self.state
            .wallets
            .insert((wallet.user_id, wallet.currency.clone()), wallet);
    }

    /// Owned snapshots of a user's wallets, in currency order.
    #[must_use]
    pub fn wallets_for(&self, user_id: UserId) -> Vec<Wallet> {
        self.state
            .wallets
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect()
    }

    // =================================================================
    // Orders
    // =================================================================

    #[must_use]
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.state.orders.get(&order_id)
    }

    pub fn upsert_order(&mut self, order: Order) {
        self.state.orders.insert(order.id, order);
    }

    pub fn remove_order(&mut self, order_id: OrderId) -> Option<Order> {
        self.state.orders.remove(&order_id)
    }

    /// Iterate every order in the active set. Ordering is unspecified.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.state.orders.values()
    }

    // =================================================================
    // Commit
    // =================================================================

    /// Install the staged state, or fail with `TransactionConflict` if the
    /// committed version advanced since `begin()`. On any error the
    /// committed state is untouched.
    pub fn commit(mut self) -> Result<()> {
        let mut guard = self
            .shared
            .write()
            .map_err(|_| OpenswapError::StorageFailure("state lock poisoned".to_string()))?;

        if guard.version != self.base_version {
            tracing::warn!(
                base = self.base_version,
                committed = guard.version,
                "transaction conflict, rolling back"
            );
            return Err(OpenswapError::TransactionConflict);
        }

        self.state.version = self.base_version + 1;
        *guard = std::mem::take(&mut self.state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use openswap_types::{Account, Order, Wallet};
    use rust_decimal::Decimal;

    use crate::ExchangeStore;

    use super::*;

    #[test]
    fn staged_writes_are_invisible_until_commit() {
        let store = ExchangeStore::new();

        let mut tx = store.begin().unwrap();
        tx.upsert_wallet(Wallet::new(UserId(1), "BTC", Decimal::ONE));
        assert!(tx.wallet(UserId(1), "BTC").is_some());

        // A parallel snapshot sees nothing until the first commits.
        let other = store.begin().unwrap();
        assert!(other.wallet(UserId(1), "BTC").is_none());
        drop(other);

        tx.commit().unwrap();
        let after = store.begin().unwrap();
        assert!(after.wallet(UserId(1), "BTC").is_some());
    }

    #[test]
    fn dropped_tx_discards_writes() {
        let store = ExchangeStore::new();

        let mut tx = store.begin().unwrap();
        tx.upsert_wallet(Wallet::new(UserId(1), "BTC", Decimal::ONE));
        tx.insert_account(Account::new(UserId(1)));
        tx.upsert_order(Order::dummy(UserId(1)));
        drop(tx);

        let after = store.begin().unwrap();
        assert!(after.wallet(UserId(1), "BTC").is_none());
        assert!(after.account(UserId(1)).is_none());
        assert_eq!(after.orders().count(), 0);
        assert_eq!(store.committed_version().unwrap(), 0);
    }

    #[test]
    fn concurrent_commit_conflicts() {
        let store = ExchangeStore::new();

        let mut first = store.begin().unwrap();
        let mut second = store.begin().unwrap();

        first.upsert_wallet(Wallet::new(UserId(1), "BTC", Decimal::ONE));
        second.upsert_wallet(Wallet::new(UserId(2), "BTC", Decimal::TWO));

        first.commit().unwrap();
        let err = second.commit().unwrap_err();
        assert!(matches!(err, OpenswapError::TransactionConflict));

        // Only the first transaction's write survives.
        let after = store.begin().unwrap();
        assert!(after.wallet(UserId(1), "BTC").is_some());
        assert!(after.wallet(UserId(2), "BTC").is_none());
    }

    #[test]
    fn wallets_for_is_sorted_by_currency() {
        let store = ExchangeStore::new();
        let mut tx = store.begin().unwrap();
        tx.upsert_wallet(Wallet::new(UserId(1), "LTC", Decimal::ONE));
        tx.upsert_wallet(Wallet::new(UserId(1), "BTC", Decimal::ONE));
        tx.upsert_wallet(Wallet::new(UserId(1), "ETH", Decimal::ONE));
        tx.upsert_wallet(Wallet::new(UserId(2), "BTC", Decimal::ONE));

        let currencies: Vec<String> = tx
            .wallets_for(UserId(1))
            .into_iter()
            .map(|w| w.currency)
            .collect();
        assert_eq!(currencies, vec!["BTC", "ETH", "LTC"]);
    }

    #[test]
    fn remove_order_returns_the_order() {
        let store = ExchangeStore::new();
        let mut tx = store.begin().unwrap();
        let order = Order::dummy(UserId(1));
        let id = order.id;
        tx.upsert_order(order);

        let removed = tx.remove_order(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(tx.order(id).is_none());
        assert!(tx.remove_order(id).is_none());
    }
}
