//! Balance mutations over a transaction handle.
//!
//! Wallets are never created here: a missing wallet for a required currency
//! is a `WalletNotFound` error, not an auto-provision point.

use openswap_store::StoreTx;
use openswap_types::{OpenswapError, Result, TransferLeg, UserId, Wallet};
use rust_decimal::Decimal;

fn fetch(tx: &StoreTx, user_id: UserId, currency: &str) -> Result<Wallet> {
    tx.wallet(user_id, currency)
        .cloned()
        .ok_or_else(|| OpenswapError::WalletNotFound {
            user_id,
            currency: currency.to_string(),
        })
}

/// Look up the balance of a (user, currency) wallet.
pub fn balance(tx: &StoreTx, user_id: UserId, currency: &str) -> Result<Decimal> {
    Ok(fetch(tx, user_id, currency)?.balance)
}

/// Owned snapshots of every wallet the user holds, in currency order.
#[must_use]
pub fn wallets_for(tx: &StoreTx, user_id: UserId) -> Vec<Wallet> {
    tx.wallets_for(user_id)
}

/// Credit a wallet. The amount must be non-negative and the wallet must
/// already exist.
pub fn credit(tx: &mut StoreTx, user_id: UserId, currency: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(OpenswapError::InvalidAmount(amount));
    }
    let mut wallet = fetch(tx, user_id, currency)?;
    wallet.balance += amount;
    tx.upsert_wallet(wallet);
    Ok(())
}

/// Debit a wallet, failing with `InsufficientFunds` if the balance cannot
/// cover the amount. The balance never goes negative.
pub fn debit(tx: &mut StoreTx, user_id: UserId, currency: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(OpenswapError::InvalidAmount(amount));
    }
    let mut wallet = fetch(tx, user_id, currency)?;
    if wallet.balance < amount {
        return Err(OpenswapError::InsufficientFunds {
            currency: currency.to_string(),
            needed: amount,
            available: wallet.balance,
        });
    }
    wallet.balance -= amount;
    tx.upsert_wallet(wallet);
    Ok(())
}

/// Apply every leg or none.
///
/// Each touched wallet is resolved once (several legs may hit the same
/// wallet); if any final balance would be negative the whole set is rejected
/// with `InsufficientFunds` and no balance in the set changes.
pub fn transfer_set(tx: &mut StoreTx, legs: &[TransferLeg]) -> Result<()> {
    // (starting balance, staged wallet) per touched wallet
    let mut staged: Vec<(Decimal, Wallet)> = Vec::with_capacity(legs.len());

    for leg in legs {
        if let Some((_, wallet)) = staged
            .iter_mut()
            .find(|(_, w)| w.user_id == leg.user_id && w.currency == leg.currency)
        {
            wallet.balance += leg.delta;
        } else {
            let mut wallet = fetch(tx, leg.user_id, &leg.currency)?;
            let start = wallet.balance;
            wallet.balance += leg.delta;
            staged.push((start, wallet));
        }
    }

    for (start, wallet) in &staged {
        if wallet.balance < Decimal::ZERO {
            return Err(OpenswapError::InsufficientFunds {
                currency: wallet.currency.clone(),
                needed: *start - wallet.balance,
                available: *start,
            });
        }
    }

    tracing::debug!(legs = legs.len(), wallets = staged.len(), "transfer set applied");
    for (_, wallet) in staged {
        tx.upsert_wallet(wallet);
    }
    Ok(())
}
