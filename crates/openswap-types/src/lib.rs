//! # openswap-types
//!
//! Shared types, errors, and configuration for the **OpenSwap** exchange core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`OrderId`], [`TradeId`]
//! - **Wallet model**: [`Wallet`], [`TransferLeg`], [`Currency`]
//! - **Order model**: [`Order`], [`OrderStatus`], [`OrderSummary`]
//! - **Account model**: [`Account`]
//! - **Receipt model**: [`FillReceipt`]
//! - **Configuration**: [`ExchangeConfig`]
//! - **Errors**: [`OpenswapError`] with `OS_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod account;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod receipt;
pub mod wallet;

// Re-export all primary types at crate root for ergonomic imports:
//   use openswap_types::{Order, Wallet, FillReceipt, ...};

pub use account::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use receipt::*;
pub use wallet::*;

// Constants are accessed via `openswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
