//! System-wide constants for the OpenSwap exchange core.

/// Currencies every new account is provisioned with.
pub const DEFAULT_CURRENCIES: [&str; 3] = ["BTC", "ETH", "LTC"];

/// Seed balance, in whole units, for each provisioned wallet.
pub const DEFAULT_SEED_UNITS: i64 = 50;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenSwap";
