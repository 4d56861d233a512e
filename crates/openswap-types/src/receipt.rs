//! Settlement receipts for the OpenSwap audit trail.
//!
//! Every successful fill produces a [`FillReceipt`] recording the realized
//! amounts on both sides, digestible for independent verification.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Currency, OrderId, TradeId, UserId};

/// Record of one settled fill: the atomic four-leg transfer realized between
/// a buyer and the order's seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FillReceipt {
    pub trade_id: TradeId,
    pub order_id: OrderId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    /// The order's `from_currency` — what the buyer received.
    pub currency_received: Currency,
    /// The order's `to_currency` — what the buyer paid with.
    pub currency_paid: Currency,
    pub amount_received: Decimal,
    pub amount_paid: Decimal,
    /// Quantity left on the order after this fill.
    pub order_remaining: Decimal,
    pub executed_at: DateTime<Utc>,
}

impl FillReceipt {
    /// Hex SHA-256 digest over the receipt's canonical fields.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"openswap:fill:v1:");
        hasher.update(self.trade_id.0.as_bytes());
        hasher.update(self.order_id.0.as_bytes());
        hasher.update(self.buyer_id.0.to_le_bytes());
        hasher.update(self.seller_id.0.to_le_bytes());
        hasher.update(self.currency_received.as_bytes());
        hasher.update(self.currency_paid.as_bytes());
        hasher.update(self.amount_received.serialize());
        hasher.update(self.amount_paid.serialize());
        hex::encode(hasher.finalize())
    }
}
