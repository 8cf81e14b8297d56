//! UI context owned by the controller.
//!
//! Holds what a browser would keep in DOM inputs and global variables: the
//! active view and the raw content of every form field.

use rust_decimal::Decimal;

use crate::domain::{Balance, Currency, UserProfile, ViewState};

/// Converter fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeForm {
    pub send_amount: String,
    pub send_currency: Currency,
    pub receive_amount: String,
    pub receive_currency: Currency,
}

impl ExchangeForm {
    /// Empty both amount fields, keeping the currency selection.
    pub fn clear_amounts(&mut self) {
        self.send_amount.clear();
        self.receive_amount.clear();
    }
}

impl Default for ExchangeForm {
    fn default() -> Self {
        Self {
            send_amount: String::new(),
            send_currency: Currency::usdt(),
            receive_amount: String::new(),
            receive_currency: Currency::btc(),
        }
    }
}

/// Trade ticket fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub amount: String,
    pub price: String,
    /// Last slider position, 0..=100.
    pub slider_percent: Decimal,
}

impl OrderForm {
    /// Reset after a submitted order.
    pub fn clear(&mut self) {
        self.amount.clear();
        self.price.clear();
        self.slider_percent = Decimal::ZERO;
    }
}

/// Deposit modal fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositForm {
    pub asset: Currency,
    pub amount: String,
}

impl Default for DepositForm {
    fn default() -> Self {
        Self {
            asset: Currency::usdt(),
            amount: String::new(),
        }
    }
}

/// Withdraw modal fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawForm {
    pub asset: Currency,
    pub amount: String,
    pub address: String,
}

impl Default for WithdrawForm {
    fn default() -> Self {
        Self {
            asset: Currency::usdt(),
            amount: String::new(),
            address: String::new(),
        }
    }
}

/// All mutable UI state of one mini-app session.
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    pub view: ViewState,
    pub exchange: ExchangeForm,
    pub order: OrderForm,
    pub deposit: DepositForm,
    pub withdraw: WithdrawForm,
    /// Loaded at startup; `None` until the backend answers.
    pub user: Option<UserProfile>,
    pub balances: Vec<Balance>,
}
