//! The settlement protocol: create, list, fill, cancel.
//!
//! Every operation opens one transaction, re-reads current state through it,
//! and commits once. Balances and order quantities are never trusted from an
//! earlier read — the store's version check rejects any transaction that
//! raced a concurrent commit.

use chrono::Utc;
use openswap_store::{ExchangeStore, StoreTx};
use openswap_types::{
    Account, Currency, FillReceipt, OpenswapError, Order, OrderId, OrderSummary, Result, TradeId,
    TransferLeg, UserId, Wallet,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Typed request to post a resting exchange order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub seller_id: UserId,
    /// Currency the seller is selling.
    pub from_currency: Currency,
    /// Currency the seller wants in return.
    pub to_currency: Currency,
    /// Quantity of `from_currency` offered.
    pub value: Decimal,
    /// Units of `to_currency` per unit of `from_currency`.
    pub exchange_rate: Decimal,
}

/// Typed request to fill (fully or partially) a resting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillOrderRequest {
    pub order_id: OrderId,
    pub buyer_id: UserId,
    /// Quantity of the order's `from_currency` to buy.
    pub amount_to_buy: Decimal,
}

/// The matching engine. Cheap to clone; clones share the underlying store
/// and are safe to drive from multiple threads.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    store: ExchangeStore,
}

impl MatchingEngine {
    #[must_use]
    pub fn new(store: ExchangeStore) -> Self {
        Self { store }
    }

    /// The shared store this engine operates on.
    #[must_use]
    pub fn store(&self) -> &ExchangeStore {
        &self.store
    }

    fn require_account(tx: &StoreTx, user_id: UserId) -> Result<()> {
        if tx.account(user_id).is_none() {
            return Err(OpenswapError::UserNotFound(user_id));
        }
        Ok(())
    }

    // =================================================================
    // Order creation
    // =================================================================

    /// Post a resting order selling `value` of `from_currency` at the given
    /// rate.
    ///
    /// The seller's `from_currency` balance must cover the offer at this
    /// moment, but the funds are not locked — a later fill re-validates the
    /// seller's wallet. Both wallets must already exist: settlement pays
    /// into the `to_currency` wallet later and never provisions it.
    pub fn create_order(&self, req: &CreateOrderRequest) -> Result<Order> {
        if req.value <= Decimal::ZERO {
            return Err(OpenswapError::InvalidAmount(req.value));
        }
        if req.exchange_rate <= Decimal::ZERO {
            return Err(OpenswapError::InvalidAmount(req.exchange_rate));
        }

        let mut tx = self.store.begin()?;
        Self::require_account(&tx, req.seller_id)?;

        let available = openswap_ledger::balance(&tx, req.seller_id, &req.from_currency)?;
        if available < req.value {
            return Err(OpenswapError::InsufficientFunds {
                currency: req.from_currency.clone(),
                needed: req.value,
                available,
            });
        }
        openswap_ledger::balance(&tx, req.seller_id, &req.to_currency)?;

        let order = Order::new(
            req.seller_id,
            req.from_currency.clone(),
            req.to_currency.clone(),
            req.value,
            req.exchange_rate,
        );
        openswap_book::insert(&mut tx, order.clone())?;
        tx.commit()?;

        tracing::info!(
            order_id = %order.id,
            seller = %order.seller_id,
            from = %order.from_currency,
            to = %order.to_currency,
            value = %order.amount_remaining,
            rate = %order.exchange_rate,
            "order created"
        );
        Ok(order)
    }

    // =================================================================
    // Discovery
    // =================================================================

    /// Orders the requester could fill: resting orders selling
    /// `buy_currency` for `sell_currency`, excluding the requester's own.
    pub fn list_matching_orders(
        &self,
        requester_id: UserId,
        sell_currency: &str,
        buy_currency: &str,
    ) -> Result<Vec<OrderSummary>> {
        let tx = self.store.begin()?;
        Ok(
            openswap_book::list_matching(&tx, requester_id, sell_currency, buy_currency)
                .iter()
                .map(Order::summary)
                .collect(),
        )
    }

    /// All orders the user has posted as seller.
    pub fn orders_for(&self, user_id: UserId) -> Result<Vec<OrderSummary>> {
        let tx = self.store.begin()?;
        Self::require_account(&tx, user_id)?;
        Ok(openswap_book::orders_for(&tx, user_id)
            .iter()
            .map(Order::summary)
            .collect())
    }

    // =================================================================
    // Fill — the four-leg settlement
    // =================================================================

    /// Fill `amount_to_buy` of a resting order on behalf of the buyer.
    ///
    /// The buyer pays `amount_to_buy * exchange_rate` of the order's
    /// `to_currency` and receives `amount_to_buy` of its `from_currency`;
    /// the seller receives the mirror legs. Wallet movement and order
    /// reduction commit as one transaction — a partial application cannot
    /// be observed.
    pub fn fill_order(&self, req: &FillOrderRequest) -> Result<FillReceipt> {
        if req.amount_to_buy <= Decimal::ZERO {
            return Err(OpenswapError::InvalidAmount(req.amount_to_buy));
        }

        let mut tx = self.store.begin()?;
        let order = openswap_book::get(&tx, req.order_id)?;

        // Resolve all four wallets up front: any missing one fails the
        // request before a single balance moves.
        let seller_selling =
            openswap_ledger::balance(&tx, order.seller_id, &order.from_currency)?;
        openswap_ledger::balance(&tx, order.seller_id, &order.to_currency)?;
        let buyer_paying = openswap_ledger::balance(&tx, req.buyer_id, &order.to_currency)?;
        openswap_ledger::balance(&tx, req.buyer_id, &order.from_currency)?;

        let amount_to_pay = req.amount_to_buy * order.exchange_rate;

        if order.amount_remaining < req.amount_to_buy || seller_selling < req.amount_to_buy {
            return Err(OpenswapError::InsufficientOrderQuantity {
                requested: req.amount_to_buy,
                available: order.amount_remaining.min(seller_selling),
            });
        }
        if buyer_paying < amount_to_pay {
            return Err(OpenswapError::InsufficientBuyerFunds {
                needed: amount_to_pay,
                available: buyer_paying,
            });
        }

        openswap_ledger::transfer_set(
            &mut tx,
            &[
                TransferLeg::debit(req.buyer_id, &order.to_currency, amount_to_pay),
                TransferLeg::credit(req.buyer_id, &order.from_currency, req.amount_to_buy),
                TransferLeg::credit(order.seller_id, &order.to_currency, amount_to_pay),
                TransferLeg::debit(order.seller_id, &order.from_currency, req.amount_to_buy),
            ],
        )?;
        let order = openswap_book::reduce_remaining(&mut tx, req.order_id, req.amount_to_buy)?;

        let receipt = FillReceipt {
            trade_id: TradeId::new(),
            order_id: order.id,
            buyer_id: req.buyer_id,
            seller_id: order.seller_id,
            currency_received: order.from_currency.clone(),
            currency_paid: order.to_currency.clone(),
            amount_received: req.amount_to_buy,
            amount_paid: amount_to_pay,
            order_remaining: order.amount_remaining,
            executed_at: Utc::now(),
        };
        tx.commit()?;

        tracing::info!(
            trade_id = %receipt.trade_id,
            order_id = %receipt.order_id,
            buyer = %receipt.buyer_id,
            seller = %receipt.seller_id,
            received = %receipt.amount_received,
            paid = %receipt.amount_paid,
            remaining = %receipt.order_remaining,
            "fill settled"
        );
        Ok(receipt)
    }

    // =================================================================
    // Cancellation
    // =================================================================

    /// Remove a resting order. No wallet is touched — nothing was locked at
    /// creation. Cancelling a filled (evicted) or unknown order is
    /// `OrderNotFound`, never a silent success.
    pub fn cancel_order(&self, order_id: OrderId, requester_id: UserId) -> Result<Order> {
        let mut tx = self.store.begin()?;
        let removed = openswap_book::remove(&mut tx, order_id, requester_id)?;
        tx.commit()?;

        tracing::info!(%order_id, requester = %requester_id, "order cancelled");
        Ok(removed)
    }

    // =================================================================
    // Balance queries
    // =================================================================

    /// The account record for a user.
    pub fn account(&self, user_id: UserId) -> Result<Account> {
        let tx = self.store.begin()?;
        tx.account(user_id)
            .cloned()
            .ok_or(OpenswapError::UserNotFound(user_id))
    }

    /// Balance of one (user, currency) wallet.
    pub fn balance(&self, user_id: UserId, currency: &str) -> Result<Decimal> {
        let tx = self.store.begin()?;
        Self::require_account(&tx, user_id)?;
        openswap_ledger::balance(&tx, user_id, currency)
    }

    /// Every wallet the user holds, in currency order.
    pub fn wallets(&self, user_id: UserId) -> Result<Vec<Wallet>> {
        let tx = self.store.begin()?;
        Self::require_account(&tx, user_id)?;
        Ok(openswap_ledger::wallets_for(&tx, user_id))
    }
}
