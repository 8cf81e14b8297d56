//! Handlers for the stateless calculation commands.
//!
//! `convert`, `percent`, `order` and `rates` run the same domain logic as
//! the session, without a bridge or backend.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{ConvertArgs, OrderArgs, PercentArgs};
use crate::adapter::inbound::cli::output;
use crate::domain::error::ValidationError;
use crate::domain::{amount_from_percentage, compose_order, ConversionRequest, Currency, OrderIntent};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

/// Execute `convert`.
pub fn execute_convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    if args.amount < Decimal::ZERO {
        return Err(ValidationError::InvalidAmount.into());
    }
    let table = config.rates.table()?;
    let request = ConversionRequest::new(
        args.amount,
        Currency::try_new(&args.from)?,
        Currency::try_new(&args.to)?,
    );
    if !table.supports(&request.source_currency, &request.dest_currency) {
        return Err(ValidationError::UnknownPair {
            from: request.source_currency,
            to: request.dest_currency,
        }
        .into());
    }
    let conversion = table
        .apply(&request)
        .ok_or(ValidationError::InvalidAmount)?;

    if output::is_json() {
        output::emit_json_line("conversion", serde_json::to_value(&conversion)?);
        return Ok(());
    }
    output::result(format!("{} {}", conversion.dest_amount, conversion.dest_currency));
    output::field("Rate", conversion.rate);
    Ok(())
}

/// Execute `percent`.
pub fn execute_percent(args: &PercentArgs, config: &Config) -> Result<()> {
    let balance = args.balance.unwrap_or(config.trading.available_balance);
    if balance < Decimal::ZERO {
        return Err(ValidationError::InvalidAmount.into());
    }
    let percent = args.percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let amount =
        amount_from_percentage(percent, balance).ok_or(ValidationError::InvalidAmount)?;

    if output::is_json() {
        output::emit_json_line(
            "amount",
            json!({
                "percent": percent.to_string(),
                "balance": balance.to_string(),
                "amount": amount.to_string(),
            }),
        );
        return Ok(());
    }
    output::result(amount);
    Ok(())
}

/// Execute `order`.
pub fn execute_order(args: &OrderArgs, config: &Config) -> Result<()> {
    let pair = config.trading.pair()?;
    let intent = OrderIntent::from_input(
        pair,
        args.side,
        &args.amount,
        args.price.as_deref().unwrap_or_default(),
    )?;
    let composed = compose_order(&intent);

    if output::is_json() {
        output::emit_json_line("order", serde_json::to_value(&composed)?);
        return Ok(());
    }
    output::result(&composed.text);
    output::field("Kind", composed.kind);
    Ok(())
}

/// Execute `rates`.
pub fn execute_rates(config: &Config) -> Result<()> {
    let table = config.rates.table()?;
    let entries = table.entries();

    if output::is_json() {
        let rows: Vec<_> = entries
            .iter()
            .map(|(from, to, rate)| json!({ "from": from, "to": to, "rate": rate }))
            .collect();
        output::emit_json_line("rates", json!(rows));
        return Ok(());
    }

    let rows: Vec<RateRow> = entries
        .into_iter()
        .map(|(from, to, rate)| RateRow {
            from: from.to_string(),
            to: to.to_string(),
            rate: rate.to_string(),
        })
        .collect();
    output::result(Table::new(rows));
    Ok(())
}
