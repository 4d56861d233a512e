//! Wallet and transfer types for the OpenSwap ledger.
//!
//! A wallet holds one user's balance of one currency. Wallets are created
//! once, by the account registry — the core never provisions them lazily.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Type alias for currency identifiers (e.g., "BTC", "ETH", "LTC").
pub type Currency = String;

/// A single (user, currency) wallet. Invariant: `balance >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub user_id: UserId,
    pub currency: Currency,
    pub balance: Decimal,
}

impl Wallet {
    #[must_use]
    pub fn new(user_id: UserId, currency: impl Into<Currency>, balance: Decimal) -> Self {
        Self {
            user_id,
            currency: currency.into(),
            balance,
        }
    }

    /// Whether this wallet holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero()
    }
}

/// One leg of a multi-leg transfer: a signed balance delta against a wallet.
///
/// A settlement is expressed as exactly four legs (two debits, two credits)
/// so the all-or-nothing guarantee is structural.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferLeg {
    pub user_id: UserId,
    pub currency: Currency,
    /// Positive = credit, negative = debit.
    pub delta: Decimal,
}

impl TransferLeg {
    /// A debit leg: removes `amount` from the wallet.
    #[must_use]
    pub fn debit(user_id: UserId, currency: impl Into<Currency>, amount: Decimal) -> Self {
        Self {
            user_id,
            currency: currency.into(),
            delta: -amount,
        }
    }

    /// A credit leg: adds `amount` to the wallet.
    #[must_use]
    pub fn credit(user_id: UserId, currency: impl Into<Currency>, amount: Decimal) -> Self {
        Self {
            user_id,
            currency: currency.into(),
            delta: amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_is_empty() {
        let wallet = Wallet::new(UserId(1), "BTC", Decimal::ZERO);
        assert!(wallet.is_empty());
        let wallet = Wallet::new(UserId(1), "BTC", Decimal::ONE);
        assert!(!wallet.is_empty());
    }

    #[test]
    fn debit_leg_is_negative() {
        let leg = TransferLeg::debit(UserId(1), "ETH", Decimal::new(25, 1));
        assert_eq!(leg.delta, Decimal::new(-25, 1));
    }

    #[test]
    fn credit_leg_is_positive() {
        let leg = TransferLeg::credit(UserId(1), "ETH", Decimal::new(25, 1));
        assert_eq!(leg.delta, Decimal::new(25, 1));
    }

    #[test]
    fn wallet_serde_roundtrip() {
        let wallet = Wallet::new(UserId(9), "LTC", Decimal::new(12345, 2));
        let json = serde_json::to_string(&wallet).unwrap();
        let back: Wallet = serde_json::from_str(&json).unwrap();
        assert_eq!(wallet, back);
    }
}
