//! Configuration types for the OpenSwap exchange core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Currency, constants};

/// Exchange-wide configuration: which currencies exist and how new accounts
/// are seeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Every account gets one wallet per listed currency at registration.
    pub currencies: Vec<Currency>,
    /// Starting balance for each seeded wallet.
    pub seed_balance: Decimal,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            currencies: constants::DEFAULT_CURRENCIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            seed_balance: Decimal::new(constants::DEFAULT_SEED_UNITS, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_seeds_three_currencies() {
        let cfg = ExchangeConfig::default();
        assert_eq!(cfg.currencies, vec!["BTC", "ETH", "LTC"]);
        assert_eq!(cfg.seed_balance, Decimal::new(50, 0));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = ExchangeConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ExchangeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
