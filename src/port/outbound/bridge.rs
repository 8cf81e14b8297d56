//! Host platform bridge port.
//!
//! The mini-app runs inside a chat client that owns the real window. The
//! bridge is everything the controller may ask of that host: lifecycle
//! signals, theming, and user-facing dialogs.

use async_trait::async_trait;

use crate::error::Result;

/// Outcome of a confirmation prompt.
///
/// Dismissing the dialog is `Declined`; there is no third "no answer" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    /// True when the user accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl From<bool> for Confirmation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Declined
        }
    }
}

/// Host platform collaborator.
///
/// Implementations must be thread-safe (`Send + Sync`). The controller
/// issues at most one prompt at a time and awaits it before continuing.
#[async_trait]
pub trait PlatformBridge: Send + Sync {
    /// Tell the host the app finished loading.
    async fn ready(&self) -> Result<()>;

    /// Ask the host to expand the web view to full height.
    async fn expand(&self) -> Result<()>;

    /// Set the host header color (`#rrggbb`).
    async fn set_header_color(&self, color: &str) -> Result<()>;

    /// Set the host background color (`#rrggbb`).
    async fn set_background_color(&self, color: &str) -> Result<()>;

    /// Show an informational alert and wait until it is dismissed.
    async fn show_alert(&self, text: &str) -> Result<()>;

    /// Ask a yes/no question.
    async fn show_confirm(&self, text: &str) -> Result<Confirmation>;

    /// Bridge name for logging.
    fn name(&self) -> &'static str;
}
