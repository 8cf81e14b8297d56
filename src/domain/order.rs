//! Order intents and confirmation text composition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::error::ValidationError;
use super::money::{parse_positive, Amount, Price};

/// Order side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order.
    #[default]
    Buy,
    /// Sell order.
    Sell,
}

impl OrderSide {
    /// Lowercase name used in confirmation text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(format!("unknown order side '{other}'")),
        }
    }
}

/// Market or limit, decided by the presence of a limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Executes at the prevailing price.
    Market,
    /// Executes at the given limit price.
    Limit,
}

impl OrderKind {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base/quote pair traded on the trade screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    /// Asset being bought or sold.
    pub base: Currency,
    /// Asset prices are quoted in.
    pub quote: Currency,
}

impl TradingPair {
    /// Create a pair.
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }
}

impl Default for TradingPair {
    fn default() -> Self {
        Self::new(Currency::btc(), Currency::usdt())
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// A user-specified trade request prior to submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIntent {
    /// Pair being traded.
    pub pair: TradingPair,
    /// Buy or sell.
    pub side: OrderSide,
    /// Size in the base currency, strictly positive.
    pub amount: Amount,
    /// Limit price in the quote currency; `None` means market.
    pub limit_price: Option<Price>,
}

impl OrderIntent {
    /// Build an intent from raw form input.
    ///
    /// An empty amount is rejected before anything else so the caller can
    /// prompt for it. An empty price means a market order.
    pub fn from_input(
        pair: TradingPair,
        side: OrderSide,
        amount: &str,
        price: &str,
    ) -> Result<Self, ValidationError> {
        if amount.trim().is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = parse_positive(amount).ok_or(ValidationError::InvalidAmount)?;

        let limit_price = if price.trim().is_empty() {
            None
        } else {
            Some(parse_positive(price).ok_or(ValidationError::InvalidPrice)?)
        };

        Ok(Self {
            pair,
            side,
            amount,
            limit_price,
        })
    }

    /// Market or limit.
    #[must_use]
    pub fn kind(&self) -> OrderKind {
        if self.limit_price.is_some() {
            OrderKind::Limit
        } else {
            OrderKind::Market
        }
    }
}

/// Confirmation text paired with the order kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedOrder {
    /// Question shown to the user.
    pub text: String,
    /// Market or limit.
    pub kind: OrderKind,
}

/// Compose the confirmation prompt for an order.
///
/// ```
/// use bridge_exchange::domain::{compose_order, OrderIntent, OrderKind, OrderSide, TradingPair};
///
/// let intent = OrderIntent::from_input(TradingPair::default(), OrderSide::Sell, "0.1", "").unwrap();
/// let composed = compose_order(&intent);
/// assert_eq!(composed.text, "Place sell market order: 0.1 BTC?");
/// assert_eq!(composed.kind, OrderKind::Market);
/// ```
#[must_use]
pub fn compose_order(intent: &OrderIntent) -> ComposedOrder {
    let pair = &intent.pair;
    let text = match intent.limit_price {
        Some(price) => format!(
            "Place {} order: {} {} at {} {}?",
            intent.side, intent.amount, pair.base, price, pair.quote
        ),
        None => format!(
            "Place {} market order: {} {}?",
            intent.side, intent.amount, pair.base
        ),
    };
    ComposedOrder {
        text,
        kind: intent.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn intent(side: OrderSide, amount: &str, price: &str) -> Result<OrderIntent, ValidationError> {
        OrderIntent::from_input(TradingPair::default(), side, amount, price)
    }

    #[test]
    fn limit_order_text() {
        let composed = compose_order(&intent(OrderSide::Buy, "0.5", "43000").unwrap());
        assert_eq!(composed.text, "Place buy order: 0.5 BTC at 43000 USDT?");
        assert_eq!(composed.kind, OrderKind::Limit);
    }

    #[test]
    fn market_order_text() {
        let composed = compose_order(&intent(OrderSide::Sell, "0.1", "").unwrap());
        assert_eq!(composed.text, "Place sell market order: 0.1 BTC?");
        assert_eq!(composed.kind, OrderKind::Market);
    }

    #[test]
    fn typed_scale_survives() {
        let composed = compose_order(&intent(OrderSide::Buy, "500.00", "").unwrap());
        assert_eq!(composed.text, "Place buy market order: 500.00 BTC?");
    }

    #[test]
    fn empty_amount_is_rejected() {
        assert_eq!(intent(OrderSide::Buy, "", "43000"), Err(ValidationError::MissingAmount));
        assert_eq!(intent(OrderSide::Buy, "  ", ""), Err(ValidationError::MissingAmount));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert_eq!(intent(OrderSide::Buy, "abc", ""), Err(ValidationError::InvalidAmount));
        assert_eq!(intent(OrderSide::Buy, "0", ""), Err(ValidationError::InvalidAmount));
        assert_eq!(intent(OrderSide::Buy, "1", "-5"), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn kind_follows_limit_price() {
        let mut i = intent(OrderSide::Buy, "1", "").unwrap();
        assert_eq!(i.kind(), OrderKind::Market);
        i.limit_price = Some(dec!(1));
        assert_eq!(i.kind(), OrderKind::Limit);
    }

    #[test]
    fn custom_pair_in_text() {
        let pair = TradingPair::new(Currency::eth(), Currency::usdt());
        let i = OrderIntent::from_input(pair, OrderSide::Buy, "2", "2800").unwrap();
        assert_eq!(compose_order(&i).text, "Place buy order: 2 ETH at 2800 USDT?");
    }

    #[test]
    fn side_parses() {
        assert_eq!("SELL".parse::<OrderSide>(), Ok(OrderSide::Sell));
        assert!("hold".parse::<OrderSide>().is_err());
    }
}
