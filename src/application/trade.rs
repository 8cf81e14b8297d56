//! Trade ticket flow.

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::controller::MiniApp;
use crate::domain::error::ValidationError;
use crate::domain::{amount_from_percentage, compose_order, OrderIntent};
use crate::error::Result;

/// Alert after an accepted order.
pub const ORDER_PLACED: &str = "Order placed successfully!";

impl MiniApp {
    /// Move the amount slider. Positions outside 0..=100 are pinned to the ends.
    ///
    /// A balance too large to scale leaves the ticket untouched.
    pub(super) fn apply_slider(&mut self, percent: Decimal) -> Result<()> {
        let percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        let amount = amount_from_percentage(percent, self.settings.available_balance)
            .ok_or(ValidationError::InvalidAmount)?;
        self.ctx.order.slider_percent = percent;
        self.ctx.order.amount = amount.to_string();
        Ok(())
    }

    pub(super) async fn place_order(&mut self) -> Result<()> {
        let intent = OrderIntent::from_input(
            self.settings.pair.clone(),
            self.ctx.view.order_side,
            &self.ctx.order.amount,
            &self.ctx.order.price,
        )?;
        let composed = compose_order(&intent);
        debug!(kind = %composed.kind, side = %intent.side, "Order composed");

        if !self.bridge.show_confirm(&composed.text).await?.is_accepted() {
            debug!("Order declined");
            return Ok(());
        }

        let receipt = self.backend.place_order(&intent).await?;
        info!(
            order_id = %receipt.order_id,
            pair = %intent.pair,
            side = %intent.side,
            kind = %composed.kind,
            amount = %intent.amount,
            "Order placed"
        );
        self.bridge.show_alert(ORDER_PLACED).await?;
        self.ctx.order.clear();
        Ok(())
    }
}
