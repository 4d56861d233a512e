//! Order types for the OpenSwap matching engine.
//!
//! An order is a standing offer to sell `amount_remaining` of
//! `from_currency` for `to_currency` at a fixed `exchange_rate` (units of
//! `to_currency` per unit of `from_currency`, immutable after creation).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Currency, OrderId, UserId};

/// Lifecycle status of an order. `Filled` is terminal and coincides with
/// eviction from the active book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Filled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Filled => write!(f, "FILLED"),
        }
    }
}

/// A resting exchange order. Invariant: `amount_remaining >= 0`; at exactly
/// zero the order transitions to [`OrderStatus::Filled`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub seller_id: UserId,
    /// Currency the seller is selling.
    pub from_currency: Currency,
    /// Currency the seller wants in return.
    pub to_currency: Currency,
    /// Quantity of `from_currency` still for sale.
    pub amount_remaining: Decimal,
    /// Units of `to_currency` per unit of `from_currency`, fixed at creation.
    pub exchange_rate: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a fresh pending order with `amount_remaining = amount`.
    #[must_use]
    pub fn new(
        seller_id: UserId,
        from_currency: impl Into<Currency>,
        to_currency: impl Into<Currency>,
        amount: Decimal,
        exchange_rate: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            seller_id,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount_remaining: amount,
            exchange_rate,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// What the seller would still receive if the rest of the order filled.
    #[must_use]
    pub fn amount_to_receive(&self) -> Decimal {
        self.amount_remaining * self.exchange_rate
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.amount_remaining.is_zero()
    }

    /// Owned summary snapshot for listings.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            seller_id: self.seller_id,
            from_currency: self.from_currency.clone(),
            to_currency: self.to_currency.clone(),
            amount_remaining: self.amount_remaining,
            exchange_rate: self.exchange_rate,
            amount_to_receive: self.amount_to_receive(),
            status: self.status,
        }
    }
}

/// Owned snapshot of an order, shaped for listing responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub seller_id: UserId,
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub amount_remaining: Decimal,
    pub exchange_rate: Decimal,
    pub amount_to_receive: Decimal,
    pub status: OrderStatus,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(seller_id: UserId) -> Self {
        Self::new(
            seller_id,
            "BTC",
            "ETH",
            Decimal::new(100, 0),
            Decimal::new(5, 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_is_pending() {
        let order = Order::new(
            UserId(1),
            "BTC",
            "ETH",
            Decimal::new(100, 0),
            Decimal::new(5, 2),
        );
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.amount_remaining, Decimal::new(100, 0));
        assert!(!order.is_filled());
    }

    #[test]
    fn amount_to_receive_tracks_remaining() {
        let mut order = Order::dummy(UserId(1));
        // 100 BTC at 0.05 ETH/BTC
        assert_eq!(order.amount_to_receive(), Decimal::new(5, 0));
        order.amount_remaining = Decimal::new(50, 0);
        assert_eq!(order.amount_to_receive(), Decimal::new(25, 1));
    }

    #[test]
    fn zero_remaining_is_filled() {
        let mut order = Order::dummy(UserId(1));
        order.amount_remaining = Decimal::ZERO;
        assert!(order.is_filled());
    }

    #[test]
    fn status_display() {
        assert_eq!(format!("{}", OrderStatus::Pending), "PENDING");
        assert_eq!(format!("{}", OrderStatus::Filled), "FILLED");
    }

    #[test]
    fn summary_carries_derived_amount() {
        let order = Order::dummy(UserId(2));
        let summary = order.summary();
        assert_eq!(summary.order_id, order.id);
        assert_eq!(summary.amount_to_receive, order.amount_to_receive());
        assert_eq!(summary.status, OrderStatus::Pending);
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = Order::dummy(UserId(4));
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
