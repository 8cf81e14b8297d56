//! CLI module graph.

pub mod command;
pub mod config;
pub mod input;
pub mod output;
pub mod quote;
pub mod run;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use command::{Cli, Commands, ConfigCommand};

/// Route a parsed command line to its handler.
pub async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(args, config).await,
        Commands::Convert(args) => quote::execute_convert(args, config),
        Commands::Percent(args) => quote::execute_percent(args, config),
        Commands::Order(args) => quote::execute_order(args, config),
        Commands::Rates => quote::execute_rates(config),
        Commands::Config(ConfigCommand::Init { path, force }) => {
            config::execute_init(path, *force)
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(config),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(config, cli.config.as_deref())
        }
    }
}
