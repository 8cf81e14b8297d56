//! Declarative view state.
//!
//! The controller only ever mutates these values; turning them into pixels,
//! terminal text, or CSS classes is the presentation layer's job.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::order::OrderSide;

/// Top-level screens reachable from the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Exchange,
    Trade,
    Games,
    Assets,
}

impl Screen {
    /// Every screen, in tab-bar order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Exchange,
        Self::Trade,
        Self::Games,
        Self::Assets,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Exchange => "exchange",
            Self::Trade => "trade",
            Self::Games => "games",
            Self::Assets => "assets",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|screen| screen.id() == wanted)
            .ok_or_else(|| format!("unknown screen '{}'", s.trim()))
    }
}

/// Overlay dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modal {
    Deposit,
    Withdraw,
}

impl Modal {
    /// Lowercase identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Modal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            other => Err(format!("unknown modal '{other}'")),
        }
    }
}

/// Tabs on the exchange screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeTab {
    #[default]
    Converter,
    BuySell,
}

/// Which holdings the assets screen lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFilter {
    #[default]
    Crypto,
    Fiat,
}

impl FromStr for AssetFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crypto" => Ok(Self::Crypto),
            "fiat" => Ok(Self::Fiat),
            other => Err(format!("unknown asset type '{other}'")),
        }
    }
}

/// Everything the presentation layer needs to know about navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Active screen.
    pub screen: Screen,
    /// Open modal, at most one.
    pub modal: Option<Modal>,
    /// Active tab on the exchange screen.
    pub exchange_tab: ExchangeTab,
    /// Side selected on the trade screen.
    pub order_side: OrderSide,
    /// Filter on the assets screen.
    pub asset_filter: AssetFilter,
}

impl ViewState {
    /// Switch the active screen.
    pub fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Open a modal, replacing any modal already open.
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    /// Close `modal` if it is the one open. Returns whether anything closed.
    pub fn close_modal(&mut self, modal: Modal) -> bool {
        if self.modal == Some(modal) {
            self.modal = None;
            true
        } else {
            false
        }
    }

    /// Whether `modal` is currently open.
    #[must_use]
    pub fn is_open(&self, modal: Modal) -> bool {
        self.modal == Some(modal)
    }
}
