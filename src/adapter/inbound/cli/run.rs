//! Handler for the `run` command.
//!
//! Hosts one mini-app session in the terminal. Commands come from a script
//! file or from an interactive prompt; each is parsed into an action and
//! dispatched to the controller. The frame is reprinted whenever it changes.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use dialoguer::Input as Prompt;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};
use tracing::{debug, info};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::input::{parse_line, Input, HELP};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::bridge::TerminalBridge;
use crate::application::{Frame, MiniApp};
use crate::domain::Balance;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Available")]
    available: String,
}

impl From<&Balance> for BalanceRow {
    fn from(balance: &Balance) -> Self {
        Self {
            asset: balance.asset.to_string(),
            amount: balance.amount.to_string(),
            available: balance.available().to_string(),
        }
    }
}

/// Whether the session should keep reading input.
enum Flow {
    Continue,
    Stop,
}

/// Execute the run command.
pub async fn execute(args: &RunArgs, config: &Config) -> Result<()> {
    let bridge = Arc::new(TerminalBridge::new(args.yes));
    let mut app = bootstrap::build_mini_app(config, bridge)?;

    app.start().await;
    let mut last = app.frame();
    print_frame(&last)?;

    match &args.script {
        Some(path) => run_script(&mut app, &mut last, path).await?,
        None => run_interactive(&mut app, &mut last).await?,
    }

    info!("Session ended");
    Ok(())
}

async fn run_script(app: &mut MiniApp, last: &mut Frame, path: &Path) -> Result<()> {
    let script = fs::read_to_string(path)?;
    debug!(path = %path.display(), "Running session script");

    for line in script.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if !output::is_quiet() && !output::is_json() {
            println!("{} {}", ">".dimmed(), line.trim());
        }
        if let Flow::Stop = handle_line(app, last, line).await? {
            break;
        }
    }
    Ok(())
}

async fn run_interactive(app: &mut MiniApp, last: &mut Frame) -> Result<()> {
    if !output::is_quiet() {
        output::field("Commands", "type 'help' for the command list");
    }

    loop {
        let line = tokio::task::spawn_blocking(|| {
            Prompt::<String>::new()
                .with_prompt("bridge")
                .allow_empty(true)
                .interact_text()
        })
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;

        // End of input closes the session like `quit`.
        let Ok(line) = line else {
            return Ok(());
        };
        if let Flow::Stop = handle_line(app, last, &line).await? {
            return Ok(());
        }
    }
}

async fn handle_line(app: &mut MiniApp, last: &mut Frame, line: &str) -> Result<Flow> {
    match parse_line(line) {
        Ok(Input::Action(action)) => {
            app.dispatch(action).await;
            let frame = app.frame();
            if frame != *last {
                print_frame(&frame)?;
                *last = frame;
            }
        }
        Ok(Input::Show) => print_frame(last)?,
        Ok(Input::Help) if output::is_json() => {
            output::emit_json_line("help", serde_json::json!({ "text": HELP }));
        }
        Ok(Input::Help) => println!("{HELP}"),
        Ok(Input::Quit) => return Ok(Flow::Stop),
        Ok(Input::Nothing) => {}
        Err(Error::Parse(message)) => output::warning(&message),
        Err(e) => return Err(e),
    }
    Ok(Flow::Continue)
}

fn print_frame(frame: &Frame) -> Result<()> {
    if output::is_json() {
        output::emit_json_line("frame", serde_json::to_value(frame)?);
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    println!();
    match &frame.badge {
        Some(badge) => println!("{} {}", frame.title.bold(), badge.magenta()),
        None => println!("{}", frame.title.bold()),
    }
    for line in &frame.lines {
        println!("  {line}");
    }
    if !frame.balances.is_empty() {
        let rows: Vec<BalanceRow> = frame.balances.iter().map(BalanceRow::from).collect();
        println!("{}", Table::new(rows));
    }
    if let Some(modal) = &frame.modal {
        println!("  {}", modal.title.cyan().bold());
        for line in &modal.lines {
            println!("    {line}");
        }
    }
    Ok(())
}
