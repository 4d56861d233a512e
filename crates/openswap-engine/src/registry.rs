//! Account registration: the collaborator that seeds users and wallets.
//!
//! The engine never creates users or wallets; it is handed a populated set.
//! Registration provisions one wallet per configured currency at the
//! configured seed balance, in a single transaction.

use openswap_store::ExchangeStore;
use openswap_types::{Account, ExchangeConfig, OpenswapError, Result, UserId, Wallet};

/// Registers accounts against the shared store.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    store: ExchangeStore,
    config: ExchangeConfig,
}

impl AccountRegistry {
    #[must_use]
    pub fn new(store: ExchangeStore, config: ExchangeConfig) -> Self {
        Self { store, config }
    }

    /// Registry with the default currency set and seed balance.
    #[must_use]
    pub fn with_defaults(store: ExchangeStore) -> Self {
        Self::new(store, ExchangeConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Register a new user and seed their wallets.
    pub fn register(&self, user_id: UserId) -> Result<Account> {
        let mut tx = self.store.begin()?;
        if tx.account(user_id).is_some() {
            return Err(OpenswapError::UserAlreadyExists(user_id));
        }

        let account = Account::new(user_id);
        tx.insert_account(account.clone());
        for currency in &self.config.currencies {
            tx.upsert_wallet(Wallet::new(user_id, currency.clone(), self.config.seed_balance));
        }
        tx.commit()?;

        tracing::info!(
            user = %user_id,
            wallets = self.config.currencies.len(),
            "account registered"
        );
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn register_seeds_one_wallet_per_currency() {
        let store = ExchangeStore::new();
        let registry = AccountRegistry::with_defaults(store.clone());
        let account = registry.register(UserId(1)).unwrap();
        assert_eq!(account.user_id, UserId(1));
        assert!(!account.address.is_empty());

        let tx = store.begin().unwrap();
        let wallets = tx.wallets_for(UserId(1));
        assert_eq!(wallets.len(), 3);
        assert!(wallets.iter().all(|w| w.balance == Decimal::new(50, 0)));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let store = ExchangeStore::new();
        let registry = AccountRegistry::with_defaults(store);
        registry.register(UserId(1)).unwrap();
        let err = registry.register(UserId(1)).unwrap_err();
        assert!(matches!(err, OpenswapError::UserAlreadyExists(_)));
    }

    #[test]
    fn custom_config_controls_seeding() {
        let store = ExchangeStore::new();
        let config = ExchangeConfig {
            currencies: vec!["BTC".to_string()],
            seed_balance: Decimal::new(7, 0),
        };
        let registry = AccountRegistry::new(store.clone(), config);
        registry.register(UserId(5)).unwrap();

        let tx = store.begin().unwrap();
        assert_eq!(tx.wallets_for(UserId(5)).len(), 1);
        assert_eq!(
            tx.wallet(UserId(5), "BTC").map(|w| w.balance),
            Some(Decimal::new(7, 0))
        );
        assert!(tx.wallet(UserId(5), "ETH").is_none());
    }
}
