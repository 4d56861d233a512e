//! Resting-order operations over a transaction handle.

use chrono::Utc;
use openswap_store::StoreTx;
use openswap_types::{OpenswapError, Order, OrderId, OrderStatus, Result, UserId};
use rust_decimal::Decimal;

/// Insert a fresh order into the active set.
pub fn insert(tx: &mut StoreTx, order: Order) -> Result<()> {
    if tx.order(order.id).is_some() {
        return Err(OpenswapError::DuplicateOrder(order.id));
    }
    tx.upsert_order(order);
    Ok(())
}

/// Look up an order by ID. Evicted (filled) orders are `OrderNotFound`.
pub fn get(tx: &StoreTx, order_id: OrderId) -> Result<Order> {
    tx.order(order_id)
        .cloned()
        .ok_or(OpenswapError::OrderNotFound(order_id))
}

/// All pending orders a prospective buyer could fill: orders selling
/// `buy_currency` for `sell_currency`, excluding the requester's own.
/// Ordering is unspecified.
#[must_use]
pub fn list_matching(
    tx: &StoreTx,
    requester_id: UserId,
    sell_currency: &str,
    buy_currency: &str,
) -> Vec<Order> {
    tx.orders()
        .filter(|o| {
            o.status == OrderStatus::Pending
                && o.seller_id != requester_id
                && o.from_currency == buy_currency
                && o.to_currency == sell_currency
        })
        .cloned()
        .collect()
}

/// All orders a user has posted as seller. Ordering is unspecified.
#[must_use]
pub fn orders_for(tx: &StoreTx, user_id: UserId) -> Vec<Order> {
    tx.orders()
        .filter(|o| o.seller_id == user_id)
        .cloned()
        .collect()
}

/// Remove an order on behalf of `requester_id`. Returns the removed order.
pub fn remove(tx: &mut StoreTx, order_id: OrderId, requester_id: UserId) -> Result<Order> {
    let order = get(tx, order_id)?;
    if order.seller_id != requester_id {
        return Err(OpenswapError::Forbidden {
            order_id,
            requester: requester_id,
        });
    }
    tx.remove_order(order_id)
        .ok_or(OpenswapError::OrderNotFound(order_id))
}

/// Subtract `amount` from the order's remaining quantity. At exactly zero
/// the order transitions to `Filled` and is evicted from the active set.
///
/// The caller bounds `amount` to the remaining quantity before calling; a
/// reduction past zero is an invariant breach, not a business outcome.
pub fn reduce_remaining(tx: &mut StoreTx, order_id: OrderId, amount: Decimal) -> Result<Order> {
    if amount <= Decimal::ZERO {
        return Err(OpenswapError::InvalidAmount(amount));
    }
    let mut order = get(tx, order_id)?;
    if amount > order.amount_remaining {
        return Err(OpenswapError::InvalidOrder {
            reason: format!(
                "reduction {amount} exceeds remaining {}",
                order.amount_remaining
            ),
        });
    }

    order.amount_remaining -= amount;
    order.updated_at = Utc::now();
    if order.amount_remaining.is_zero() {
        order.status = OrderStatus::Filled;
        tx.remove_order(order_id);
        tracing::debug!(%order_id, "order fully filled, evicted from book");
    } else {
        tx.upsert_order(order.clone());
    }
    Ok(order)
}
