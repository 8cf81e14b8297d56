//! Deposit and withdrawal flows.

use tracing::info;

use super::controller::MiniApp;
use crate::domain::{DepositRequest, Modal, WithdrawalRequest};
use crate::error::Result;

impl MiniApp {
    pub(super) async fn create_deposit(&mut self) -> Result<()> {
        let request =
            DepositRequest::from_input(self.ctx.deposit.asset.clone(), &self.ctx.deposit.amount)?;

        let invoice = self.backend.create_deposit_invoice(&request).await?;
        info!(
            invoice_id = %invoice.invoice_id,
            asset = %request.asset,
            amount = %request.amount,
            "Deposit invoice created"
        );

        self.bridge
            .show_alert(&format!(
                "Creating deposit: {} {}\nThis would create a CryptoPay invoice.",
                request.amount, request.asset
            ))
            .await?;
        self.ctx.view.close_modal(Modal::Deposit);
        self.ctx.deposit.amount.clear();
        Ok(())
    }

    pub(super) async fn create_withdrawal(&mut self) -> Result<()> {
        let form = &self.ctx.withdraw;
        let request = WithdrawalRequest::from_input(form.asset.clone(), &form.amount, &form.address)?;

        let ticket = self.backend.create_withdrawal(&request).await?;
        info!(
            request_id = %ticket.request_id,
            asset = %request.asset,
            amount = %request.amount,
            "Withdrawal requested"
        );

        self.bridge
            .show_alert(&format!(
                "Creating withdrawal: {} {} to {}\nThis would create a withdrawal request.",
                request.amount, request.asset, request.address
            ))
            .await?;
        self.ctx.view.close_modal(Modal::Withdraw);
        self.ctx.withdraw.amount.clear();
        self.ctx.withdraw.address.clear();
        Ok(())
    }
}
