//! Key event handling for the modal editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::editor::NanoEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Continue,
    Save,
    Run,
    Close,
}

/// Handle a key while the editor is open. Anything that is not an editor
/// action goes to the text area.
pub fn handle_key_event(editor: &mut NanoEditor, key_evt: KeyEvent) -> EditorOutcome {
    let ctrl = key_evt.modifiers.contains(KeyModifiers::CONTROL);
    match key_evt.code {
        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => EditorOutcome::Save,
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => {
            if editor.can_run() {
                EditorOutcome::Run
            } else {
                EditorOutcome::Continue
            }
        }
        KeyCode::Char('x') | KeyCode::Char('X') if ctrl => EditorOutcome::Close,
        KeyCode::Esc => EditorOutcome::Close,
        _ => {
            editor.input(key_evt);
            EditorOutcome::Continue
        }
    }
}
