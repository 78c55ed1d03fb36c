//! Colours derived from the config.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Accent colours offered by the settings panel.
pub const ACCENT_PRESETS: &[&str] = &["#00ff00", "#00ffff", "#ffbf00", "#ff00ff", "#ffffff"];
/// Backgrounds offered by the settings panel.
pub const BACKGROUND_PRESETS: &[&str] = &["reset", "#000000", "#0a1f0a", "#001b2e"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: parse_color(&config.accent, Color::Green),
            background: parse_color(&config.background, Color::Reset),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn text(&self) -> Style {
        self.base().fg(self.accent)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.base().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            self.base().fg(Color::DarkGray)
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        self.base().fg(Color::DarkGray)
    }
}

fn parse_color(raw: &str, fallback: Color) -> Color {
    match Color::from_str(raw.trim()) {
        Ok(color) => color,
        Err(_) => {
            tracing::warn!("Unrecognised colour {:?}, using {:?}", raw, fallback);
            fallback
        }
    }
}
