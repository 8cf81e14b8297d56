//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every section has defaults, so an empty file is a valid config.
//!
//! # Example
//!
//! ```no_run
//! use bridge_exchange::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::logging::LoggingConfig;
use super::rates::RatesConfig;
use super::theme::ThemeConfig;
use super::trading::TradingConfig;
use super::wallet::WalletConfig;
use crate::application::MiniAppSettings;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Host colors applied at startup.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Traded pair and slider balance.
    #[serde(default)]
    pub trading: TradingConfig,

    /// Balances served by the mock backend.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Conversion rate table. Defaults to the demo table.
    #[serde(default)]
    pub rates: RatesConfig,
}

impl Config {
    /// Load and validate a TOML config file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate TOML config text.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.theme.validate()?;
        self.trading.validate()?;
        self.wallet.validate()?;
        self.rates.validate()?;
        Ok(())
    }

    /// Session settings for the controller.
    #[allow(clippy::result_large_err)]
    pub fn mini_app_settings(&self) -> Result<MiniAppSettings> {
        Ok(MiniAppSettings {
            theme: (&self.theme).into(),
            pair: self.trading.pair()?,
            available_balance: self.trading.available_balance,
            rates: self.rates.table()?,
        })
    }

    /// Render the effective configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::Error::Parse(e.to_string()))
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
