//! User profile and balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Profile of the mini-app user as known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id.
    pub id: u64,
    /// Chat-platform user id.
    pub telegram_id: i64,
    /// Chat-platform username.
    pub username: String,
    /// Loyalty level shown in the header.
    pub level: u32,
    /// Premium flag.
    pub is_premium: bool,
}

impl UserProfile {
    /// Header badge text.
    #[must_use]
    pub fn level_label(&self) -> String {
        format!("Level {}", self.level)
    }
}

/// Holdings of a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Asset held.
    pub asset: Currency,
    /// Total amount.
    pub amount: Decimal,
    /// Amount locked in open orders or pending withdrawals.
    #[serde(default)]
    pub reserved: Decimal,
}

impl Balance {
    /// Create a balance with nothing reserved.
    pub fn new(asset: Currency, amount: Decimal) -> Self {
        Self {
            asset,
            amount,
            reserved: Decimal::ZERO,
        }
    }

    /// Amount free to trade or withdraw.
    #[must_use]
    pub fn available(&self) -> Decimal {
        self.amount - self.reserved
    }
}
