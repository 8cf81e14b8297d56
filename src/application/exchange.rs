//! Converter flow.

use rust_decimal::Decimal;
use tracing::{debug, info, trace};

use super::controller::MiniApp;
use crate::domain::error::ValidationError;
use crate::domain::{parse_or_zero, parse_positive, ConversionRequest};
use crate::error::Result;

/// Alert after an accepted swap.
pub const EXCHANGE_EXECUTED: &str = "Exchange executed successfully!";

impl MiniApp {
    /// Refresh the receive field from the send field and currency selection.
    ///
    /// An unknown pair, or an amount too large to convert, leaves the
    /// receive field as it was.
    pub(super) fn recalculate_exchange(&mut self) {
        let form = &mut self.ctx.exchange;
        let request = ConversionRequest::new(
            parse_or_zero(&form.send_amount).max(Decimal::ZERO),
            form.send_currency.clone(),
            form.receive_currency.clone(),
        );

        match self.settings.rates.apply(&request) {
            Some(conversion) => form.receive_amount = conversion.dest_amount.to_string(),
            None => trace!(
                from = %request.source_currency,
                to = %request.dest_currency,
                amount = %request.source_amount,
                "No conversion, receive amount unchanged"
            ),
        }
    }

    pub(super) async fn execute_exchange(&mut self) -> Result<()> {
        let form = &self.ctx.exchange;
        let send = form.send_amount.trim();
        let receive = form.receive_amount.trim();
        if send.is_empty() || receive.is_empty() {
            return Err(ValidationError::MissingExchangeAmounts.into());
        }

        let amount = parse_positive(send).ok_or(ValidationError::InvalidAmount)?;
        let request =
            ConversionRequest::new(amount, form.send_currency.clone(), form.receive_currency.clone());
        if !self
            .settings
            .rates
            .supports(&request.source_currency, &request.dest_currency)
        {
            return Err(ValidationError::UnknownPair {
                from: request.source_currency,
                to: request.dest_currency,
            }
            .into());
        }
        // Known pair, so only an amount too large to convert is left.
        let conversion = self
            .settings
            .rates
            .apply(&request)
            .ok_or(ValidationError::InvalidAmount)?;

        let text = format!(
            "Exchange {} {} for {} {}?",
            send, conversion.source_currency, receive, conversion.dest_currency
        );
        if !self.bridge.show_confirm(&text).await?.is_accepted() {
            debug!("Exchange declined");
            return Ok(());
        }

        let receipt = self.backend.execute_swap(&conversion).await?;
        info!(
            swap_id = %receipt.swap_id,
            from = %conversion.source_currency,
            to = %conversion.dest_currency,
            amount = %conversion.source_amount,
            "Exchange executed"
        );
        self.bridge.show_alert(EXCHANGE_EXECUTED).await?;
        self.ctx.exchange.clear_amounts();
        Ok(())
    }
}
