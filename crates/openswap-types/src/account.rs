//! Account records handed to the core by the registry collaborator.
//!
//! Credential material (password hashes, recovery secrets) lives outside
//! this system and is never stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::UserId;

/// A registered user account. Owns zero-or-more wallets and zero-or-more
/// orders (as seller); both are reached via explicit queries, not through
/// live back-references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub user_id: UserId,
    /// Opaque address string, assigned at registration.
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a fresh account with a newly generated address.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            address: Uuid::now_v7().to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_unique() {
        let a = Account::new(UserId(1));
        let b = Account::new(UserId(2));
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn account_serde_roundtrip() {
        let account = Account::new(UserId(3));
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, back);
    }
}
