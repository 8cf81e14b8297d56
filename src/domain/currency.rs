//! Currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Ticker-style currency code such as `BTC` or `USDT`.
///
/// Codes are trimmed and upper-cased on construction so `"btc"` and
/// `" BTC "` name the same currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a currency code, normalizing case and whitespace.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Create a currency code, rejecting blank input.
    pub fn try_new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let currency = Self::new(code);
        if currency.0.is_empty() {
            return Err(DomainError::EmptyCurrency);
        }
        Ok(currency)
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tether, the quote currency of the default pair.
    #[must_use]
    pub fn usdt() -> Self {
        Self::new("USDT")
    }

    /// Bitcoin, the base currency of the default pair.
    #[must_use]
    pub fn btc() -> Self {
        Self::new("BTC")
    }

    /// Ether.
    #[must_use]
    pub fn eth() -> Self {
        Self::new("ETH")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_normalized() {
        assert_eq!(Currency::new(" btc "), Currency::btc());
        assert_eq!(Currency::new("usdt").as_str(), "USDT");
    }

    #[test]
    fn blank_code_is_rejected() {
        assert_eq!(Currency::try_new("   "), Err(DomainError::EmptyCurrency));
        assert!("ETH".parse::<Currency>().is_ok());
    }
}
