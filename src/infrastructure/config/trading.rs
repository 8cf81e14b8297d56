//! Trade screen configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{amount_from_percentage, Currency, TradingPair};
use crate::error::ConfigError;

/// Pair and slider balance for the trade screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradingConfig {
    /// Base currency of the traded pair.
    #[serde(default = "default_base")]
    pub base: String,
    /// Quote currency of the traded pair.
    #[serde(default = "default_quote")]
    pub quote: String,
    /// Balance the amount slider scales against.
    #[serde(default = "default_available_balance")]
    pub available_balance: Decimal,
}

fn default_base() -> String {
    "BTC".into()
}

fn default_quote() -> String {
    "USDT".into()
}

fn default_available_balance() -> Decimal {
    Decimal::from(1000)
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            quote: default_quote(),
            available_balance: default_available_balance(),
        }
    }
}

impl TradingConfig {
    /// Build the traded pair.
    pub fn pair(&self) -> Result<TradingPair, ConfigError> {
        let base =
            Currency::try_new(&self.base).map_err(|_| ConfigError::MissingField { field: "base" })?;
        let quote = Currency::try_new(&self.quote)
            .map_err(|_| ConfigError::MissingField { field: "quote" })?;
        if base == quote {
            return Err(ConfigError::InvalidValue {
                field: "quote",
                reason: format!("must differ from base {base}"),
            });
        }
        Ok(TradingPair::new(base, quote))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.pair()?;
        if self.available_balance < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "available_balance",
                reason: format!("must be non-negative, got {}", self.available_balance),
            });
        }
        if amount_from_percentage(Decimal::ONE_HUNDRED, self.available_balance).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "available_balance",
                reason: format!("too large to scale, got {}", self.available_balance),
            });
        }
        Ok(())
    }
}
