//! Key event handling for the prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::context::History;
use crate::ui::output::OutputScroll;
use crate::ui::prompt::PromptInput;

/// Rows moved by PageUp/PageDown.
const PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    None,
    /// Enter was pressed; the line is handed to the console.
    Submit(String),
}

/// Handle a key while the prompt has focus.
pub fn handle_key_event(
    prompt: &mut PromptInput,
    history: &mut History,
    scroll: &mut OutputScroll,
    key_evt: KeyEvent,
) -> PromptAction {
    let ctrl = key_evt.modifiers.contains(KeyModifiers::CONTROL);
    match key_evt.code {
        KeyCode::Enter => {
            scroll.reset();
            return PromptAction::Submit(prompt.take());
        }
        // Ctrl+U: clear the line
        KeyCode::Char('u') | KeyCode::Char('U') if ctrl => {
            prompt.take();
        }
        KeyCode::Char(c) if !ctrl && !key_evt.modifiers.contains(KeyModifiers::ALT) => {
            prompt.insert_char(c);
        }
        KeyCode::Backspace => prompt.backspace(),
        KeyCode::Delete => prompt.delete(),
        KeyCode::Left => prompt.move_left(),
        KeyCode::Right => prompt.move_right(),
        KeyCode::Home => prompt.move_home(),
        KeyCode::End => prompt.move_end(),
        KeyCode::Up => {
            if let Some(line) = history.older() {
                prompt.set(line);
            }
        }
        KeyCode::Down => match history.newer() {
            Some(line) => prompt.set(line),
            None => {
                prompt.take();
            }
        },
        KeyCode::PageUp => scroll.scroll_up(PAGE),
        KeyCode::PageDown => scroll.scroll_down(PAGE),
        _ => {}
    }
    PromptAction::None
}
