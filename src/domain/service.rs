//! Catalogue of third-party services sold for crypto.

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Services offered on the games screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Steam,
    PlayStation,
    Netflix,
    Spotify,
}

impl ServiceKind {
    /// Every service, in display order.
    pub const ALL: [Self; 4] = [Self::Steam, Self::PlayStation, Self::Netflix, Self::Spotify];

    /// Identifier used by the UI.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Steam => "steam",
            Self::PlayStation => "playstation",
            Self::Netflix => "netflix",
            Self::Spotify => "spotify",
        }
    }

    /// Product name shown to the user.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Steam => "Steam Gift Cards",
            Self::PlayStation => "PlayStation Store Cards",
            Self::Netflix => "Netflix Subscriptions",
            Self::Spotify => "Spotify Premium",
        }
    }

    /// Alert text after the user picks this service.
    #[must_use]
    pub fn selection_message(&self) -> String {
        format!(
            "Selected: {}\nThis would open the service selection interface.",
            self.display_name()
        )
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ServiceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| ValidationError::UnknownService(s.trim().to_string()))
    }
}
