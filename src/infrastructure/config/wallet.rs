//! Mock wallet configuration.

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::backend::MockBackend;
use crate::domain::Balance;
use crate::error::ConfigError;

/// Balances served by the mock backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
    #[serde(default = "MockBackend::demo_balances")]
    pub balances: Vec<Balance>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            balances: MockBackend::demo_balances(),
        }
    }
}

impl WalletConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for balance in &self.balances {
            if balance.amount.is_sign_negative() || balance.reserved > balance.amount {
                return Err(ConfigError::InvalidValue {
                    field: "balances",
                    reason: format!(
                        "{}: amount {} with reserved {}",
                        balance.asset, balance.amount, balance.reserved
                    ),
                });
            }
        }
        Ok(())
    }
}
