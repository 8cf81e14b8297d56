//! Host theme colors.

use serde::{Deserialize, Serialize};

use crate::application::Theme;
use crate::error::ConfigError;

const DEFAULT_COLOR: &str = "#1a0b2e";

/// Colors pushed to the host at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_color")]
    pub header_color: String,
    #[serde(default = "default_color")]
    pub background_color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.into()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header_color: default_color(),
            background_color: default_color(),
        }
    }
}

/// `#rrggbb`, case-insensitive.
fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl ThemeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("header_color", &self.header_color),
            ("background_color", &self.background_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected #rrggbb, got '{value}'"),
                });
            }
        }
        Ok(())
    }
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            header_color: config.header_color.clone(),
            background_color: config.background_color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_colors() {
        assert!(is_hex_color("#1a0b2e"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("1a0b2e"));
        assert!(!is_hex_color("#1a0b2"));
        assert!(!is_hex_color("#1a0b2g"));
    }

    #[test]
    fn rejects_bad_header_color() {
        let config = ThemeConfig {
            header_color: "purple".into(),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "header_color",
                ..
            })
        ));
    }
}
