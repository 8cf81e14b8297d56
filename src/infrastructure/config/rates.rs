//! Conversion rate table configuration.
//!
//! ```toml
//! [rates.BTC]
//! USDT = 43000
//! ETH = 15
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::{Currency, RateTable};
use crate::error::ConfigError;

/// `from -> to -> multiplier`, as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RatesConfig(pub BTreeMap<String, BTreeMap<String, Decimal>>);

impl Default for RatesConfig {
    /// The demo table. Directionally incomplete on purpose: only pairs listed
    /// here convert.
    fn default() -> Self {
        let rows = [
            ("USDT", [("BTC", dec!(0.000023)), ("ETH", dec!(0.0004))]),
            ("BTC", [("USDT", dec!(43000)), ("ETH", dec!(15))]),
            ("ETH", [("USDT", dec!(2800)), ("BTC", dec!(0.065))]),
        ];
        Self(
            rows.into_iter()
                .map(|(from, row)| {
                    let row: BTreeMap<String, Decimal> = row
                        .into_iter()
                        .map(|(to, rate)| (to.to_string(), rate))
                        .collect();
                    (from.to_string(), row)
                })
                .collect(),
        )
    }
}

impl RatesConfig {
    /// Build the immutable rate table.
    pub fn table(&self) -> Result<RateTable, ConfigError> {
        let entries = self.0.iter().flat_map(|(from, row)| {
            row.iter()
                .map(move |(to, rate)| (Currency::new(from), Currency::new(to), *rate))
        });

        RateTable::new(entries).map_err(|e| match e {
            DomainError::NonPositiveRate { from, to, rate } => ConfigError::InvalidValue {
                field: "rates",
                reason: format!("{from}->{to} must be positive, got {rate}"),
            },
            other => ConfigError::InvalidValue {
                field: "rates",
                reason: other.to_string(),
            },
        })
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (from, row) in &self.0 {
            if from.trim().is_empty() || row.keys().any(|to| to.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "rates",
                    reason: "currency codes cannot be empty".into(),
                });
            }
        }
        self.table().map(|_| ())
    }
}
