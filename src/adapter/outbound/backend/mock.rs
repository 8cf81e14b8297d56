//! In-process stand-in for the exchange API.
//!
//! Returns canned profile and balance data and mints pending receipts for
//! every request. Nothing is persisted and no balance ever moves.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::domain::{
    Balance, Conversion, Currency, DepositRequest, OrderIntent, UserProfile, WithdrawalRequest,
};
use crate::error::{BackendError, Result};
use crate::port::{
    DepositInvoice, ExchangeBackend, OrderReceipt, RequestStatus, SwapReceipt, WithdrawalTicket,
};

const PAY_BASE_URL: &str = "https://pay.crypt.bot/pay/";

/// Mock exchange backend.
#[derive(Debug, Clone)]
pub struct MockBackend {
    profile: UserProfile,
    balances: Vec<Balance>,
}

impl MockBackend {
    /// Create a backend serving the given profile and balances.
    #[must_use]
    pub fn new(profile: UserProfile, balances: Vec<Balance>) -> Self {
        Self { profile, balances }
    }

    /// The demo user.
    #[must_use]
    pub fn demo_profile() -> UserProfile {
        UserProfile {
            id: 1,
            telegram_id: 123_456_789,
            username: "testuser".into(),
            level: 1,
            is_premium: false,
        }
    }

    /// The demo wallet.
    #[must_use]
    pub fn demo_balances() -> Vec<Balance> {
        vec![
            Balance::new(Currency::usdt(), dec!(1000.00)),
            Balance::new(Currency::btc(), dec!(0.05)),
            Balance::new(Currency::eth(), dec!(2.5)),
        ]
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(Self::demo_profile(), Self::demo_balances())
    }
}

/// Short random reference such as `inv_3f2a9c1d`.
fn reference(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &id[..8])
}

#[async_trait]
impl ExchangeBackend for MockBackend {
    async fn fetch_user_profile(&self) -> Result<UserProfile> {
        Ok(self.profile.clone())
    }

    async fn fetch_balances(&self) -> Result<Vec<Balance>> {
        Ok(self.balances.clone())
    }

    async fn create_deposit_invoice(&self, request: &DepositRequest) -> Result<DepositInvoice> {
        let invoice_id = reference("inv");
        let pay_url = Url::parse(PAY_BASE_URL)
            .and_then(|base| base.join(&invoice_id))
            .map_err(|e| BackendError::RequestFailed {
                operation: "create_deposit_invoice",
                reason: e.to_string(),
            })?;
        debug!(%invoice_id, %pay_url, "Mock invoice created");

        Ok(DepositInvoice {
            invoice_id,
            pay_url,
            status: RequestStatus::Pending,
            asset: request.asset.clone(),
            amount: request.amount,
            created_at: Utc::now(),
        })
    }

    async fn create_withdrawal(&self, request: &WithdrawalRequest) -> Result<WithdrawalTicket> {
        Ok(WithdrawalTicket {
            request_id: reference("wd"),
            status: RequestStatus::Pending,
            asset: request.asset.clone(),
            amount: request.amount,
            address: request.address.clone(),
            created_at: Utc::now(),
        })
    }

    async fn place_order(&self, intent: &OrderIntent) -> Result<OrderReceipt> {
        Ok(OrderReceipt {
            order_id: reference("ord"),
            status: RequestStatus::Pending,
            pair: intent.pair.clone(),
            side: intent.side,
            kind: intent.kind(),
            amount: intent.amount,
            price: intent.limit_price,
            created_at: Utc::now(),
        })
    }

    async fn execute_swap(&self, conversion: &Conversion) -> Result<SwapReceipt> {
        Ok(SwapReceipt {
            swap_id: reference("swp"),
            status: RequestStatus::Completed,
            conversion: conversion.clone(),
            created_at: Utc::now(),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
