//! Key event handling for the settings overlay.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::settings::SettingsPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    Continue,
    /// The theme changed and should be applied.
    Changed,
    /// Close and persist.
    Close,
}

pub fn handle_key_event(panel: &mut SettingsPanel, key_evt: KeyEvent) -> SettingsOutcome {
    match key_evt.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            panel.toggle_row();
            SettingsOutcome::Continue
        }
        KeyCode::Right => {
            panel.cycle(true);
            SettingsOutcome::Changed
        }
        KeyCode::Left => {
            panel.cycle(false);
            SettingsOutcome::Changed
        }
        KeyCode::Esc | KeyCode::Enter => SettingsOutcome::Close,
        _ => SettingsOutcome::Continue,
    }
}
