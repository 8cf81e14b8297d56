//! Surface-agnostic domain logic: currencies, rates, orders, funding, view state.

mod currency;
mod funding;
mod money;
mod order;
mod rate;
mod service;
mod user;
mod view;

pub mod error;

pub use currency::Currency;
pub use funding::{DepositRequest, WithdrawalRequest};
pub use money::{
    amount_from_percentage, parse_amount, parse_or_zero, parse_positive, to_fixed, Amount, Price,
    CONVERSION_DIGITS, PERCENTAGE_DIGITS,
};
pub use order::{compose_order, ComposedOrder, OrderIntent, OrderKind, OrderSide, TradingPair};
pub use rate::{Conversion, ConversionRequest, RateTable};
pub use service::ServiceKind;
pub use user::{Balance, UserProfile};
pub use view::{AssetFilter, ExchangeTab, Modal, Screen, ViewState};
