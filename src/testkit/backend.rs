//! Backends that misbehave on purpose.

use async_trait::async_trait;

use crate::domain::{Balance, Conversion, DepositRequest, OrderIntent, UserProfile, WithdrawalRequest};
use crate::error::{BackendError, Result};
use crate::port::{DepositInvoice, ExchangeBackend, OrderReceipt, SwapReceipt, WithdrawalTicket};

/// A backend whose every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingBackend;

fn failed<T>(operation: &'static str) -> Result<T> {
    Err(BackendError::RequestFailed {
        operation,
        reason: "connection refused".into(),
    }
    .into())
}

#[async_trait]
impl ExchangeBackend for FailingBackend {
    async fn fetch_user_profile(&self) -> Result<UserProfile> {
        failed("fetch_user_profile")
    }

    async fn fetch_balances(&self) -> Result<Vec<Balance>> {
        failed("fetch_balances")
    }

    async fn create_deposit_invoice(&self, _request: &DepositRequest) -> Result<DepositInvoice> {
        failed("create_deposit_invoice")
    }

    async fn create_withdrawal(&self, _request: &WithdrawalRequest) -> Result<WithdrawalTicket> {
        failed("create_withdrawal")
    }

    async fn place_order(&self, _intent: &OrderIntent) -> Result<OrderReceipt> {
        failed("place_order")
    }

    async fn execute_swap(&self, _conversion: &Conversion) -> Result<SwapReceipt> {
        failed("execute_swap")
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
