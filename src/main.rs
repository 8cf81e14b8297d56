use std::process::ExitCode;

use anyhow::Context;
use bridge_exchange::adapter::inbound::cli::command::Cli;
use bridge_exchange::adapter::inbound::cli::output::{self, OutputConfig};
use bridge_exchange::adapter::inbound::cli::dispatch;
use bridge_exchange::infrastructure::config::settings::Config;
use clap::Parser;
use tracing::{debug, error};

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("{e:#}"));
            return ExitCode::FAILURE;
        }
    };

    config.init_logging();
    debug!(command = ?cli.command, "bridge-exchange starting");

    match dispatch(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
