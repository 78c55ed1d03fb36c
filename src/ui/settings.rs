//! Theme settings overlay.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::config::ThemeConfig;
use crate::ui::editor::centered;
use crate::ui::theme::{ACCENT_PRESETS, BACKGROUND_PRESETS, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Accent,
    Background,
}

impl SettingsRow {
    fn label(self) -> &'static str {
        match self {
            SettingsRow::Accent => "Theme colour",
            SettingsRow::Background => "Background",
        }
    }

    fn presets(self) -> &'static [&'static str] {
        match self {
            SettingsRow::Accent => ACCENT_PRESETS,
            SettingsRow::Background => BACKGROUND_PRESETS,
        }
    }
}

/// Edits a copy of the theme; the app applies it on every change.
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    row: SettingsRow,
    theme: ThemeConfig,
}

impl SettingsPanel {
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            row: SettingsRow::Accent,
            theme,
        }
    }

    pub fn row(&self) -> SettingsRow {
        self.row
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn toggle_row(&mut self) {
        self.row = match self.row {
            SettingsRow::Accent => SettingsRow::Background,
            SettingsRow::Background => SettingsRow::Accent,
        };
    }

    fn value_mut(&mut self) -> &mut String {
        match self.row {
            SettingsRow::Accent => &mut self.theme.accent,
            SettingsRow::Background => &mut self.theme.background,
        }
    }

    /// Move the selected row to the next (or previous) preset. A value that
    /// is not a preset starts over from the first one.
    pub fn cycle(&mut self, forward: bool) {
        let presets = self.row.presets();
        let value = self.value_mut();
        let next = match presets.iter().position(|p| p.eq_ignore_ascii_case(value)) {
            Some(i) if forward => (i + 1) % presets.len(),
            Some(i) => (i + presets.len() - 1) % presets.len(),
            None => 0,
        };
        *value = presets[next].to_string();
    }

    pub fn render_overlay(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let popup = centered(area, 50, 30);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .style(theme.base())
            .title(" Settings ")
            .title_bottom(Line::from(" ↑↓ select  ←→ change  Esc close ").style(theme.dim()));

        let lines: Vec<Line> = [SettingsRow::Accent, SettingsRow::Background]
            .into_iter()
            .map(|row| {
                let value = match row {
                    SettingsRow::Accent => &self.theme.accent,
                    SettingsRow::Background => &self.theme.background,
                };
                let style = if row == self.row {
                    theme.highlight()
                } else {
                    theme.text()
                };
                Line::from(vec![
                    Span::styled(format!("{:<14}", row.label()), style),
                    Span::styled(format!("< {} >", value), theme.text()),
                ])
            })
            .collect();
        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_presets_and_wraps() {
        let mut panel = SettingsPanel::new(ThemeConfig::default());
        assert_eq!(panel.theme().accent, ACCENT_PRESETS[0]);

        panel.cycle(true);
        assert_eq!(panel.theme().accent, ACCENT_PRESETS[1]);
        panel.cycle(false);
        panel.cycle(false);
        assert_eq!(panel.theme().accent, ACCENT_PRESETS[ACCENT_PRESETS.len() - 1]);
    }

    #[test]
    fn test_unknown_value_restarts_at_first_preset() {
        let mut panel = SettingsPanel::new(ThemeConfig {
            accent: "#123456".to_string(),
            background: "reset".to_string(),
        });
        panel.cycle(true);
        assert_eq!(panel.theme().accent, ACCENT_PRESETS[0]);
    }

    #[test]
    fn test_rows_edit_their_own_field() {
        let mut panel = SettingsPanel::new(ThemeConfig::default());
        panel.toggle_row();
        assert_eq!(panel.row(), SettingsRow::Background);
        panel.cycle(true);
        assert_eq!(panel.theme().background, BACKGROUND_PRESETS[1]);
        assert_eq!(panel.theme().accent, ThemeConfig::default().accent);
    }
}
