//! Top-level mini-app controller.
//!
//! [`MiniApp`] owns the [`UiContext`] and turns [`Action`]s into state
//! changes and bridge/backend calls. Every action runs behind a single
//! boundary: validation errors are alerted verbatim, anything else is logged
//! and replaced by a generic alert. Nothing escapes [`MiniApp::dispatch`].

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info};

use super::context::UiContext;
use super::render::{render, Frame};
use crate::domain::{Currency, Modal, RateTable, Screen, ServiceKind, TradingPair};
use crate::error::{Error, Result};
use crate::port::{Action, ExchangeBackend, PlatformBridge, PlatformEvent, GENERIC_FAILURE};

/// Alert for the pay shortcut.
pub const PAY_MESSAGE: &str = "Payment QR code would be displayed here";

/// Alert for the "more" shortcut.
pub const MORE_MESSAGE: &str =
    "More options:\n• Invoices\n• Flight tickets\n• Service payments\n• Promo codes\n• Fees";

/// Host colors applied at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub header_color: String,
    pub background_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_color: "#1a0b2e".into(),
            background_color: "#1a0b2e".into(),
        }
    }
}

/// Static inputs of a session, fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct MiniAppSettings {
    pub theme: Theme,
    /// Pair traded on the trade screen.
    pub pair: TradingPair,
    /// Balance the amount slider scales against.
    pub available_balance: Decimal,
    pub rates: RateTable,
}

/// The mini-app controller.
pub struct MiniApp {
    pub(super) bridge: Arc<dyn PlatformBridge>,
    pub(super) backend: Arc<dyn ExchangeBackend>,
    pub(super) settings: MiniAppSettings,
    pub(super) ctx: UiContext,
}

impl MiniApp {
    /// Create a controller with a fresh context.
    pub fn new(
        settings: MiniAppSettings,
        bridge: Arc<dyn PlatformBridge>,
        backend: Arc<dyn ExchangeBackend>,
    ) -> Self {
        Self {
            bridge,
            backend,
            settings,
            ctx: UiContext::default(),
        }
    }

    /// Current UI state.
    #[must_use]
    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    /// Session settings.
    #[must_use]
    pub fn settings(&self) -> &MiniAppSettings {
        &self.settings
    }

    /// Render the current state for a presentation surface.
    #[must_use]
    pub fn frame(&self) -> Frame {
        render(&self.ctx, &self.settings.pair)
    }

    /// Bring the app up inside the host.
    ///
    /// Host setup failures are reported like any uncaught error. User data
    /// failures are only logged; the app stays usable without a profile.
    pub async fn start(&mut self) {
        info!(
            bridge = self.bridge.name(),
            backend = self.backend.name(),
            "Starting mini-app"
        );
        if let Err(e) = self.initialize_host().await {
            self.report_uncaught(&e).await;
        }
        self.ctx.view.show_screen(Screen::Home);
        self.load_user_data().await;
    }

    async fn initialize_host(&self) -> Result<()> {
        self.bridge.ready().await?;
        self.bridge.expand().await?;
        self.bridge
            .set_header_color(&self.settings.theme.header_color)
            .await?;
        self.bridge
            .set_background_color(&self.settings.theme.background_color)
            .await?;
        Ok(())
    }

    async fn load_user_data(&mut self) {
        match self.backend.fetch_user_profile().await {
            Ok(profile) => {
                info!(user_id = profile.id, level = profile.level, "User data loaded");
                self.ctx.user = Some(profile);
            }
            Err(e) => error!(error = %e, "Error loading user data"),
        }
        match self.backend.fetch_balances().await {
            Ok(balances) => {
                debug!(count = balances.len(), "Balances loaded");
                self.ctx.balances = balances;
            }
            Err(e) => error!(error = %e, "Error loading balances"),
        }
    }

    /// Handle one user interaction.
    pub async fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "Dispatching action");
        if let Err(e) = self.run(&action).await {
            self.fail(action.name(), action.failure_message(), e).await;
        }
    }

    /// Report an error raised outside any action.
    pub async fn report_uncaught(&self, error: &Error) {
        error!(error = %error, "Uncaught error");
        self.alert_quietly(GENERIC_FAILURE).await;
    }

    async fn fail(&self, action: &'static str, failure_message: &str, error: Error) {
        match error {
            Error::Validation(reason) => {
                debug!(action, reason = %reason, "Action rejected");
                self.alert_quietly(&reason.to_string()).await;
            }
            other => {
                error!(action, error = %other, "Action failed");
                self.alert_quietly(failure_message).await;
            }
        }
    }

    /// Alert without propagating bridge failures; there is nowhere left to report them.
    async fn alert_quietly(&self, text: &str) {
        if let Err(e) = self.bridge.show_alert(text).await {
            error!(error = %e, "Failed to show alert");
        }
    }

    async fn run(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::ShowScreen(screen) => self.ctx.view.show_screen(*screen),
            Action::ShowModal(modal) => self.ctx.view.open_modal(*modal),
            Action::CloseModal(modal) => {
                self.ctx.view.close_modal(*modal);
            }
            Action::ShowBuy => self.ctx.view.open_modal(Modal::Deposit),
            Action::ShowPay => self.bridge.show_alert(PAY_MESSAGE).await?,
            Action::ShowMore => self.bridge.show_alert(MORE_MESSAGE).await?,
            Action::ShowTab(tab) => self.ctx.view.exchange_tab = *tab,

            Action::SetSendAmount(amount) => {
                self.ctx.exchange.send_amount = amount.clone();
                self.recalculate_exchange();
            }
            Action::SetSendCurrency(code) => {
                self.ctx.exchange.send_currency = Currency::try_new(code)?;
                self.recalculate_exchange();
            }
            Action::SetReceiveCurrency(code) => {
                self.ctx.exchange.receive_currency = Currency::try_new(code)?;
                self.recalculate_exchange();
            }
            Action::ExecuteExchange => self.execute_exchange().await?,

            Action::SetOrderSide(side) => self.ctx.view.order_side = *side,
            Action::SetSliderPercent(percent) => self.apply_slider(*percent)?,
            Action::SetOrderAmount(amount) => self.ctx.order.amount = amount.clone(),
            Action::SetOrderPrice(price) => self.ctx.order.price = price.clone(),
            Action::PlaceOrder => self.place_order().await?,

            Action::SelectService(name) => {
                let service: ServiceKind = name.parse()?;
                self.bridge.show_alert(&service.selection_message()).await?;
            }
            Action::ToggleAssetType(filter) => self.ctx.view.asset_filter = *filter,

            Action::SetDepositAsset(code) => self.ctx.deposit.asset = Currency::try_new(code)?,
            Action::SetDepositAmount(amount) => self.ctx.deposit.amount = amount.clone(),
            Action::CreateDeposit => self.create_deposit().await?,
            Action::SetWithdrawAsset(code) => self.ctx.withdraw.asset = Currency::try_new(code)?,
            Action::SetWithdrawAmount(amount) => self.ctx.withdraw.amount = amount.clone(),
            Action::SetWithdrawAddress(address) => self.ctx.withdraw.address = address.clone(),
            Action::CreateWithdraw => self.create_withdrawal().await?,

            Action::Platform(event) => self.handle_platform_event(*event),
        }
        Ok(())
    }

    fn handle_platform_event(&self, event: PlatformEvent) {
        match event {
            PlatformEvent::ViewportChanged => info!("Viewport changed"),
            PlatformEvent::ThemeChanged => info!(
                header = %self.settings.theme.header_color,
                "Theme changed, keeping configured colors"
            ),
        }
    }
}
