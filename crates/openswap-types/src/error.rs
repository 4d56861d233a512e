//! Error types for the OpenSwap exchange core.
//!
//! All errors use the `OS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 2xx: Account / wallet errors
//! - 3xx: Balance-rule violations
//! - 4xx: Storage / transaction errors
//!
//! Business-rule violations (3xx) carry the quantities that were short and
//! are never retried internally; `TransactionConflict` is retryable, but any
//! retry policy belongs to the caller.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Currency, OrderId, UserId};

/// Central error enum for all OpenSwap operations.
#[derive(Debug, Error)]
pub enum OpenswapError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The requested order is absent from the active book.
    #[error("OS_ERR_100: order not found: {0}")]
    OrderNotFound(OrderId),

    /// An order invariant would be broken (e.g. over-reduction).
    #[error("OS_ERR_101: invalid order: {reason}")]
    InvalidOrder { reason: String },

    /// An order with this ID already exists.
    #[error("OS_ERR_102: order already exists: {0}")]
    DuplicateOrder(OrderId),

    /// The requester is not the order's seller.
    #[error("OS_ERR_103: {requester} is not the seller of order {order_id}")]
    Forbidden {
        order_id: OrderId,
        requester: UserId,
    },

    // =================================================================
    // Account / Wallet Errors (2xx)
    // =================================================================
    /// No account exists for this user.
    #[error("OS_ERR_200: user not found: {0}")]
    UserNotFound(UserId),

    /// An account with this user ID is already registered.
    #[error("OS_ERR_201: user already exists: {0}")]
    UserAlreadyExists(UserId),

    /// A required wallet does not exist. Wallets are never auto-provisioned.
    #[error("OS_ERR_202: {currency} wallet not found for {user_id}")]
    WalletNotFound {
        user_id: UserId,
        currency: Currency,
    },

    // =================================================================
    // Balance-Rule Violations (3xx)
    // =================================================================
    /// A debit would drive a wallet balance negative.
    #[error("OS_ERR_300: insufficient funds in {currency}: need {needed}, have {available}")]
    InsufficientFunds {
        currency: Currency,
        needed: Decimal,
        available: Decimal,
    },

    /// The fill exceeds the order's remaining quantity or the seller's cover.
    #[error("OS_ERR_301: insufficient order quantity: requested {requested}, available {available}")]
    InsufficientOrderQuantity {
        requested: Decimal,
        available: Decimal,
    },

    /// The buyer's paying wallet cannot cover the amount due.
    #[error("OS_ERR_302: insufficient buyer funds: need {needed}, have {available}")]
    InsufficientBuyerFunds { needed: Decimal, available: Decimal },

    /// A request amount or rate was not strictly positive.
    #[error("OS_ERR_303: amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    // =================================================================
    // Storage / Transaction Errors (4xx)
    // =================================================================
    /// The committed state advanced during the transaction; the whole
    /// request failed and may be retried by the caller.
    #[error("OS_ERR_400: transaction conflict: committed state advanced during the transaction")]
    TransactionConflict,

    /// The storage collaborator is unavailable.
    #[error("OS_ERR_401: storage failure: {0}")]
    StorageFailure(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpenswapError>;
