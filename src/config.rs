use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Heading shown above the current question
    pub title: String,
    /// Theme preset: "darkwall", "catppuccin-mocha", "catppuccin-latte", "nord", "gruvbox"
    pub theme: String,
    /// Shown in the question card before the first draw
    pub placeholder: String,
    /// Per-color hex overrides applied on top of the preset
    pub colors: ColorOverrides,
}

/// Optional hex colors (`#rrggbb` / `#rgb`) overriding the theme preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
    pub dimmed: Option<String>,
    pub dimmed_alt: Option<String>,
    pub card_bg: Option<String>,
    pub notice_success: Option<String>,
    pub notice_warning: Option<String>,
    pub notice_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// How long a notice stays visible, in milliseconds (0 = until next action)
    pub notice_timeout_ms: u64,
    /// Start with the history panel expanded
    pub history_expanded: bool,
    /// Start with the remaining pool panel expanded
    pub pool_expanded: bool,
    /// Question file loaded at startup when `--file` is not given
    pub questions_file: Option<String>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: "Seminar Discussion".to_string(),
            theme: "darkwall".to_string(),
            placeholder: "Waiting to start...".to_string(),
            colors: ColorOverrides::default(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            notice_timeout_ms: 4000,
            history_expanded: true,
            pool_expanded: false,
            questions_file: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Build the theme from the preset name plus any color overrides.
    ///
    /// Unknown presets and unparseable colors are logged and skipped.
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme preset '{}', using default",
                self.appearance.theme
            );
            Theme::default()
        });

        let colors = &self.appearance.colors;
        let overrides = [
            (&colors.background, &mut theme.background),
            (&colors.foreground, &mut theme.foreground),
            (&colors.accent, &mut theme.accent),
            (&colors.dimmed, &mut theme.dimmed),
            (&colors.dimmed_alt, &mut theme.dimmed_alt),
            (&colors.card_bg, &mut theme.card_bg),
            (&colors.notice_success, &mut theme.notice_success),
            (&colors.notice_warning, &mut theme.notice_warning),
            (&colors.notice_error, &mut theme.notice_error),
        ];

        for (hex, slot) in overrides {
            let Some(hex) = hex else { continue };
            match parse_hex_color(hex) {
                Ok(color) => *slot = color,
                Err(e) => tracing::warn!("Ignoring color '{}': {}", hex, e),
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.appearance.title, "Seminar Discussion");
        assert_eq!(config.behavior.notice_timeout_ms, 4000);
        assert!(config.behavior.history_expanded);
        assert!(!config.behavior.pool_expanded);
        assert!(config.behavior.questions_file.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [behavior]
            pool_expanded = true

            [appearance]
            theme = "nord"
            "#,
        )
        .unwrap();

        assert!(config.behavior.pool_expanded);
        assert!(config.behavior.history_expanded);
        assert_eq!(config.appearance.theme, "nord");
        assert_eq!(config.appearance.placeholder, "Waiting to start...");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/qpick/config.toml").unwrap();
        assert_eq!(config.appearance.theme, "darkwall");
    }

    #[test]
    fn test_resolve_theme_overrides() {
        let mut config = Config::default();
        config.appearance.theme = "gruvbox".to_string();
        config.appearance.colors.accent = Some("#ff0000".to_string());
        config.appearance.colors.dimmed = Some("not-a-color".to_string());

        let theme = config.resolve_theme();
        let gruvbox = Theme::gruvbox();
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.dimmed, gruvbox.dimmed);
        assert_eq!(theme.background, gruvbox.background);
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let mut config = Config::default();
        config.appearance.theme = "solarized-ish".to_string();
        assert_eq!(config.resolve_theme().background, Theme::darkwall().background);
    }
}
