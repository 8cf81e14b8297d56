//! Presentation layer.
//!
//! Maps the declarative [`UiContext`] onto a surface-independent [`Frame`].
//! A web view would map the same frame onto DOM classes; the CLI prints it.

use std::fmt;

use serde::Serialize;

use super::context::UiContext;
use crate::domain::{AssetFilter, Balance, ExchangeTab, Modal, OrderSide, Screen, ServiceKind, TradingPair};

/// Rendered overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalFrame {
    pub modal: Modal,
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// One rendered screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub screen: Screen,
    pub title: &'static str,
    /// Header badge, e.g. `Level 1`, once the profile is loaded.
    pub badge: Option<String>,
    pub lines: Vec<String>,
    /// Holdings visible on this screen under the active filter.
    pub balances: Vec<Balance>,
    pub modal: Option<ModalFrame>,
}

/// Label of the trade button for a side.
#[must_use]
pub fn order_button_label(side: OrderSide, pair: &TradingPair) -> String {
    match side {
        OrderSide::Buy => format!("Buy {}", pair.base),
        OrderSide::Sell => format!("Sell {}", pair.base),
    }
}

fn field(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Render the current context.
#[must_use]
pub fn render(ctx: &UiContext, pair: &TradingPair) -> Frame {
    let view = &ctx.view;
    let mut balances = Vec::new();

    let (title, lines) = match view.screen {
        Screen::Home => (
            "Wallet",
            vec!["Actions: deposit, withdraw, buy, pay, more".to_string()],
        ),
        Screen::Exchange => {
            let tabs = match view.exchange_tab {
                ExchangeTab::Converter => "[Converter]  Buy/Sell",
                ExchangeTab::BuySell => "Converter  [Buy/Sell]",
            };
            let form = &ctx.exchange;
            (
                "Exchange",
                vec![
                    tabs.to_string(),
                    format!("Send:    {} {}", field(&form.send_amount), form.send_currency),
                    format!(
                        "Receive: {} {}",
                        field(&form.receive_amount),
                        form.receive_currency
                    ),
                ],
            )
        }
        Screen::Trade => {
            let form = &ctx.order;
            let price = if form.price.trim().is_empty() {
                "market".to_string()
            } else {
                format!("{} {}", form.price, pair.quote)
            };
            (
                "Trade",
                vec![
                    format!("Pair:   {pair}"),
                    format!("Side:   {}", view.order_side),
                    format!("Amount: {} {}", field(&form.amount), pair.base),
                    format!("Price:  {price}"),
                    format!("Slider: {}%", form.slider_percent),
                    format!("[{}]", order_button_label(view.order_side, pair)),
                ],
            )
        }
        Screen::Games => (
            "Services",
            ServiceKind::ALL
                .iter()
                .map(|service| format!("{:<12} {}", service.id(), service.display_name()))
                .collect(),
        ),
        Screen::Assets => {
            let filter = match view.asset_filter {
                AssetFilter::Crypto => "[Crypto]  Fiat",
                AssetFilter::Fiat => "Crypto  [Fiat]",
            };
            if view.asset_filter == AssetFilter::Crypto {
                balances = ctx.balances.clone();
            }
            ("Assets", vec![filter.to_string()])
        }
    };

    Frame {
        screen: view.screen,
        title,
        badge: ctx.user.as_ref().map(|user| user.level_label()),
        lines,
        balances,
        modal: view.modal.map(|modal| render_modal(ctx, modal)),
    }
}

fn render_modal(ctx: &UiContext, modal: Modal) -> ModalFrame {
    match modal {
        Modal::Deposit => ModalFrame {
            modal,
            title: "Deposit",
            lines: vec![
                format!("Asset:   {}", ctx.deposit.asset),
                format!("Amount:  {}", field(&ctx.deposit.amount)),
            ],
        },
        Modal::Withdraw => ModalFrame {
            modal,
            title: "Withdraw",
            lines: vec![
                format!("Asset:   {}", ctx.withdraw.asset),
                format!("Amount:  {}", field(&ctx.withdraw.amount)),
                format!("Address: {}", field(&ctx.withdraw.address)),
            ],
        },
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.badge {
            Some(badge) => writeln!(f, "== {} ({badge}) ==", self.title)?,
            None => writeln!(f, "== {} ==", self.title)?,
        }
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        for balance in &self.balances {
            writeln!(f, "  {:<6} {}", balance.asset, balance.amount)?;
        }
        if let Some(modal) = &self.modal {
            writeln!(f, "  -- {} --", modal.title)?;
            for line in &modal.lines {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }
}
