//! Terminal platform bridge.
//!
//! Hosts the mini-app in a terminal: alerts go through the CLI output layer
//! (plain or JSON lines), confirmations are asked with `dialoguer`, and host
//! lifecycle calls only log.

use async_trait::async_trait;
use dialoguer::Confirm;
use tracing::debug;

use crate::adapter::inbound::cli::output;
use crate::error::{BridgeError, Result};
use crate::port::{Confirmation, PlatformBridge};

/// Bridge that talks to the user on stdin/stdout.
#[derive(Debug, Clone, Default)]
pub struct TerminalBridge {
    /// Accept every confirmation without asking (scripted sessions).
    assume_yes: bool,
}

impl TerminalBridge {
    /// Create a terminal bridge.
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl PlatformBridge for TerminalBridge {
    async fn ready(&self) -> Result<()> {
        debug!("Host ready");
        Ok(())
    }

    async fn expand(&self) -> Result<()> {
        debug!("Host expanded");
        Ok(())
    }

    async fn set_header_color(&self, color: &str) -> Result<()> {
        debug!(color, "Header color set");
        Ok(())
    }

    async fn set_background_color(&self, color: &str) -> Result<()> {
        debug!(color, "Background color set");
        Ok(())
    }

    async fn show_alert(&self, text: &str) -> Result<()> {
        output::alert(text);
        Ok(())
    }

    async fn show_confirm(&self, text: &str) -> Result<Confirmation> {
        if self.assume_yes {
            output::confirmation(text, true, true);
            return Ok(Confirmation::Accepted);
        }

        let prompt = text.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::new().with_prompt(prompt).default(false).interact()
        })
        .await
        .map_err(|e| BridgeError::CallFailed {
            call: "show_confirm",
            reason: e.to_string(),
        })??;

        output::confirmation(text, answer, false);
        Ok(Confirmation::from(answer))
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}
