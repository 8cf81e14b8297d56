//! Static conversion rate table.
//!
//! Rates are directional: `BTC -> USDT` and `USDT -> BTC` are independent
//! entries. A missing entry means the conversion is undefined; the table
//! never derives an inverse, a transitive rate, or an identity rate.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::currency::Currency;
use super::error::DomainError;
use super::money::{to_fixed, Amount, CONVERSION_DIGITS};

/// A single conversion, ephemeral for one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Amount in the source currency (non-negative).
    pub source_amount: Amount,
    /// Currency being sent.
    pub source_currency: Currency,
    /// Currency being received.
    pub dest_currency: Currency,
}

impl ConversionRequest {
    /// Build a conversion request.
    pub fn new(source_amount: Amount, source_currency: Currency, dest_currency: Currency) -> Self {
        Self {
            source_amount,
            source_currency,
            dest_currency,
        }
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Amount sent.
    pub source_amount: Amount,
    /// Currency sent.
    pub source_currency: Currency,
    /// Amount received, scaled to [`CONVERSION_DIGITS`].
    pub dest_amount: Amount,
    /// Currency received.
    pub dest_currency: Currency,
    /// Multiplier applied.
    pub rate: Decimal,
}

/// Immutable mapping `from -> to -> multiplier`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: HashMap<Currency, HashMap<Currency, Decimal>>,
}

impl RateTable {
    /// Build a table from `(from, to, rate)` entries.
    ///
    /// Fails on the first non-positive rate. A repeated pair keeps the last
    /// entry.
    pub fn new<I>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (Currency, Currency, Decimal)>,
    {
        let mut rates: HashMap<Currency, HashMap<Currency, Decimal>> = HashMap::new();
        for (from, to, rate) in entries {
            if rate <= Decimal::ZERO {
                return Err(DomainError::NonPositiveRate { from, to, rate });
            }
            rates.entry(from).or_default().insert(to, rate);
        }
        Ok(Self { rates })
    }

    /// Multiplier for `from -> to`, if the pair is present.
    #[must_use]
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        self.rates.get(from)?.get(to).copied()
    }

    /// Whether `from -> to` has an entry.
    #[must_use]
    pub fn supports(&self, from: &Currency, to: &Currency) -> bool {
        self.rate(from, to).is_some()
    }

    /// Convert `amount` from one currency into another.
    ///
    /// Returns `None` for an unknown pair, and for an amount whose product
    /// overflows or cannot carry [`CONVERSION_DIGITS`] fractional digits.
    /// Callers leave their destination untouched in that case.
    ///
    /// ```
    /// use bridge_exchange::domain::{Currency, RateTable};
    /// use rust_decimal_macros::dec;
    ///
    /// let table = RateTable::new([(Currency::btc(), Currency::usdt(), dec!(43000))]).unwrap();
    /// let out = table.convert(dec!(1), &Currency::btc(), &Currency::usdt()).unwrap();
    /// assert_eq!(out.to_string(), "43000.00000000");
    /// assert!(table.convert(dec!(1), &Currency::usdt(), &Currency::btc()).is_none());
    /// ```
    #[must_use]
    pub fn convert(&self, amount: Amount, from: &Currency, to: &Currency) -> Option<Amount> {
        let rate = self.rate(from, to)?;
        to_fixed(amount.checked_mul(rate)?, CONVERSION_DIGITS)
    }

    /// Apply the table to a request.
    #[must_use]
    pub fn apply(&self, request: &ConversionRequest) -> Option<Conversion> {
        let rate = self.rate(&request.source_currency, &request.dest_currency)?;
        let dest_amount = to_fixed(request.source_amount.checked_mul(rate)?, CONVERSION_DIGITS)?;
        Some(Conversion {
            source_amount: request.source_amount,
            source_currency: request.source_currency.clone(),
            dest_amount,
            dest_currency: request.dest_currency.clone(),
            rate,
        })
    }

    /// All entries, sorted by `(from, to)` for stable output.
    #[must_use]
    pub fn entries(&self) -> Vec<(Currency, Currency, Decimal)> {
        let mut entries: Vec<_> = self
            .rates
            .iter()
            .flat_map(|(from, row)| {
                row.iter()
                    .map(move |(to, rate)| (from.clone(), to.clone(), *rate))
            })
            .collect();
        entries.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        entries
    }

    /// Number of directional pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    /// True when no pair is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
