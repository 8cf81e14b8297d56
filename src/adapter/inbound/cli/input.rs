//! Session command parsing.
//!
//! One line of terminal input maps to at most one [`Action`]. Words after a
//! field command are joined back together, so `address bc1q xyz` keeps the
//! space and `price` alone clears the field.

use rust_decimal::Decimal;

use crate::domain::{AssetFilter, ExchangeTab, Modal, OrderSide, Screen};
use crate::error::{Error, Result};
use crate::port::{Action, PlatformEvent};

/// What a session line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    /// Re-render the current frame.
    Show,
    Help,
    Quit,
    /// Blank line or comment.
    Nothing,
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
navigation: home | exchange | trade | games | assets | screen <name>
            deposit | withdraw | close <deposit|withdraw> | buy-crypto | pay | more
converter:  tab <converter|buysell> | send <amount> | from <CUR> | to <CUR> | swap
trade:      side <buy|sell> | slider <0-100> | amount <v> | price [v] | place
services:   service <steam|playstation|netflix|spotify>
assets:     filter <crypto|fiat>
deposit:    deposit-asset <CUR> | deposit-amount <v> | deposit-submit
withdraw:   withdraw-asset <CUR> | withdraw-amount <v> | withdraw-address <addr> | withdraw-submit
host:       viewport | theme
session:    show | help | quit";

fn parse_err(message: impl Into<String>) -> Error {
    Error::Parse(message.into())
}

fn required<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(parse_err(format!("'{command}' needs an argument")))
    } else {
        Ok(rest)
    }
}

/// Parse one session line.
pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Input::Nothing);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let command = command.to_ascii_lowercase();

    let action = match command.as_str() {
        "quit" | "exit" => return Ok(Input::Quit),
        "help" | "?" => return Ok(Input::Help),
        "show" => return Ok(Input::Show),

        "screen" => Action::ShowScreen(required(&command, rest)?.parse().map_err(parse_err)?),
        "home" | "exchange" | "trade" | "games" | "assets" => {
            Action::ShowScreen(command.parse::<Screen>().map_err(parse_err)?)
        }
        "deposit" => Action::ShowModal(Modal::Deposit),
        "withdraw" => Action::ShowModal(Modal::Withdraw),
        "close" => Action::CloseModal(required(&command, rest)?.parse().map_err(parse_err)?),
        "buy-crypto" => Action::ShowBuy,
        "pay" => Action::ShowPay,
        "more" => Action::ShowMore,
        "tab" => Action::ShowTab(match required(&command, rest)?.to_ascii_lowercase().as_str() {
            "converter" => ExchangeTab::Converter,
            "buysell" | "buy-sell" => ExchangeTab::BuySell,
            other => return Err(parse_err(format!("unknown tab '{other}'"))),
        }),

        "send" => Action::SetSendAmount(rest.to_string()),
        "from" => Action::SetSendCurrency(required(&command, rest)?.to_string()),
        "to" => Action::SetReceiveCurrency(required(&command, rest)?.to_string()),
        "swap" => Action::ExecuteExchange,

        "side" => Action::SetOrderSide(
            required(&command, rest)?
                .parse::<OrderSide>()
                .map_err(parse_err)?,
        ),
        "slider" => {
            let raw = required(&command, rest)?.trim_end_matches('%');
            let percent: Decimal = raw
                .parse()
                .map_err(|_| parse_err(format!("'{raw}' is not a percentage")))?;
            Action::SetSliderPercent(percent)
        }
        "amount" => Action::SetOrderAmount(rest.to_string()),
        "price" => Action::SetOrderPrice(rest.to_string()),
        "place" => Action::PlaceOrder,

        "service" => Action::SelectService(required(&command, rest)?.to_string()),
        "filter" => Action::ToggleAssetType(
            required(&command, rest)?
                .parse::<AssetFilter>()
                .map_err(parse_err)?,
        ),

        "deposit-asset" => Action::SetDepositAsset(required(&command, rest)?.to_string()),
        "deposit-amount" => Action::SetDepositAmount(rest.to_string()),
        "deposit-submit" => Action::CreateDeposit,
        "withdraw-asset" => Action::SetWithdrawAsset(required(&command, rest)?.to_string()),
        "withdraw-amount" => Action::SetWithdrawAmount(rest.to_string()),
        "withdraw-address" => Action::SetWithdrawAddress(rest.to_string()),
        "withdraw-submit" => Action::CreateWithdraw,

        "viewport" => Action::Platform(PlatformEvent::ViewportChanged),
        "theme" => Action::Platform(PlatformEvent::ThemeChanged),

        other => return Err(parse_err(format!("unknown command '{other}', try 'help'"))),
    };

    Ok(Input::Action(action))
}
