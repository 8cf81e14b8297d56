//! User interactions and host notifications the controller reacts to.

use rust_decimal::Decimal;

use crate::domain::{AssetFilter, ExchangeTab, Modal, OrderSide, Screen};

/// Host-side notifications that do not come from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    ViewportChanged,
    ThemeChanged,
}

/// A discrete user interaction.
///
/// Text-field actions carry the raw field content; parsing and validation
/// happen in the flow that consumes the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    ShowScreen(Screen),
    ShowModal(Modal),
    CloseModal(Modal),
    ShowBuy,
    ShowPay,
    ShowMore,
    ShowTab(ExchangeTab),

    // Converter
    SetSendAmount(String),
    SetSendCurrency(String),
    SetReceiveCurrency(String),
    ExecuteExchange,

    // Trade
    SetOrderSide(OrderSide),
    SetSliderPercent(Decimal),
    SetOrderAmount(String),
    SetOrderPrice(String),
    PlaceOrder,

    // Games and assets
    SelectService(String),
    ToggleAssetType(AssetFilter),

    // Funding
    SetDepositAsset(String),
    SetDepositAmount(String),
    CreateDeposit,
    SetWithdrawAsset(String),
    SetWithdrawAmount(String),
    SetWithdrawAddress(String),
    CreateWithdraw,

    Platform(PlatformEvent),
}

/// Generic alert for unexpected failures.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

impl Action {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ShowScreen(_) => "show_screen",
            Self::ShowModal(_) => "show_modal",
            Self::CloseModal(_) => "close_modal",
            Self::ShowBuy => "show_buy",
            Self::ShowPay => "show_pay",
            Self::ShowMore => "show_more",
            Self::ShowTab(_) => "show_tab",
            Self::SetSendAmount(_) => "set_send_amount",
            Self::SetSendCurrency(_) => "set_send_currency",
            Self::SetReceiveCurrency(_) => "set_receive_currency",
            Self::ExecuteExchange => "execute_exchange",
            Self::SetOrderSide(_) => "set_order_side",
            Self::SetSliderPercent(_) => "set_slider_percent",
            Self::SetOrderAmount(_) => "set_order_amount",
            Self::SetOrderPrice(_) => "set_order_price",
            Self::PlaceOrder => "place_order",
            Self::SelectService(_) => "select_service",
            Self::ToggleAssetType(_) => "toggle_asset_type",
            Self::SetDepositAsset(_) => "set_deposit_asset",
            Self::SetDepositAmount(_) => "set_deposit_amount",
            Self::CreateDeposit => "create_deposit",
            Self::SetWithdrawAsset(_) => "set_withdraw_asset",
            Self::SetWithdrawAmount(_) => "set_withdraw_amount",
            Self::SetWithdrawAddress(_) => "set_withdraw_address",
            Self::CreateWithdraw => "create_withdraw",
            Self::Platform(_) => "platform_event",
        }
    }

    /// Alert shown when this action fails unexpectedly.
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::CreateDeposit => "Error creating deposit",
            Self::CreateWithdraw => "Error creating withdrawal",
            _ => GENERIC_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funding_actions_have_specific_failure_text() {
        assert_eq!(Action::CreateDeposit.failure_message(), "Error creating deposit");
        assert_eq!(Action::CreateWithdraw.failure_message(), "Error creating withdrawal");
        assert_eq!(Action::PlaceOrder.failure_message(), GENERIC_FAILURE);
    }
}
