//! Exchange backend port.
//!
//! Stands in for the exchange API the mini-app would call. Every operation
//! receives already validated domain values; validation stays in the domain.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;

use crate::domain::{
    Balance, Conversion, Currency, DepositRequest, OrderIntent, OrderKind, OrderSide, TradingPair,
    UserProfile, WithdrawalRequest,
};
use crate::error::Result;

/// Lifecycle of a backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Completed,
}

/// Payment invoice created for a deposit.
#[derive(Debug, Clone, Serialize)]
pub struct DepositInvoice {
    pub invoice_id: String,
    pub pay_url: Url,
    pub status: RequestStatus,
    pub asset: Currency,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Accepted withdrawal request.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalTicket {
    pub request_id: String,
    pub status: RequestStatus,
    pub asset: Currency,
    pub amount: Decimal,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Order accepted by the exchange.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub status: RequestStatus,
    pub pair: TradingPair,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub amount: Decimal,
    pub price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Completed currency swap.
#[derive(Debug, Clone, Serialize)]
pub struct SwapReceipt {
    pub swap_id: String,
    pub status: RequestStatus,
    pub conversion: Conversion,
    pub created_at: DateTime<Utc>,
}

/// Exchange backend operations used by the mini-app flows.
#[async_trait]
pub trait ExchangeBackend: Send + Sync {
    /// Profile of the current user.
    async fn fetch_user_profile(&self) -> Result<UserProfile>;

    /// Balances of the current user.
    async fn fetch_balances(&self) -> Result<Vec<Balance>>;

    /// Create a payment invoice for a deposit.
    async fn create_deposit_invoice(&self, request: &DepositRequest) -> Result<DepositInvoice>;

    /// File a withdrawal request.
    async fn create_withdrawal(&self, request: &WithdrawalRequest) -> Result<WithdrawalTicket>;

    /// Submit an order.
    async fn place_order(&self, intent: &OrderIntent) -> Result<OrderReceipt>;

    /// Execute a currency swap at the quoted conversion.
    async fn execute_swap(&self, conversion: &Conversion) -> Result<SwapReceipt>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}
