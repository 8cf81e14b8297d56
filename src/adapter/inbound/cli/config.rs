//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::success("Created configuration file");
    output::field("Path", path.display());
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        output::emit_json_line("config", serde_json::to_value(config)?);
        return Ok(());
    }
    output::result(config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file; this also resolves the derived
/// session settings and reports a summary.
pub fn execute_validate(config: &Config, path: Option<&Path>) -> Result<()> {
    let settings = config.mini_app_settings()?;

    output::success("Configuration valid");
    match path {
        Some(path) => output::field("Path", path.display()),
        None => output::field("Path", "(built-in defaults)"),
    }
    output::section("Session");
    output::field("Pair", &settings.pair);
    output::field("Rates", settings.rates.len());
    output::field("Balances", config.wallet.balances.len());
    output::field("Log level", &config.logging.level);
    Ok(())
}
