//! Key event handling for the file browser.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::browser::FileBrowser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    None,
    /// Open the selected entry: enter it if it is a folder.
    Open(String),
    Back,
    Forward,
    /// Hand focus back to the prompt.
    Leave,
}

pub fn handle_key_event(browser: &mut FileBrowser, files: &[String], key_evt: KeyEvent) -> BrowserAction {
    match key_evt.code {
        KeyCode::Up | KeyCode::Char('k') => browser.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => browser.select_next(files.len()),
        KeyCode::Enter => {
            if let Some(entry) = browser.selected_entry(files) {
                return BrowserAction::Open(entry.to_string());
            }
        }
        KeyCode::Backspace | KeyCode::Left => return BrowserAction::Back,
        KeyCode::Right => return BrowserAction::Forward,
        KeyCode::Esc | KeyCode::Tab => return BrowserAction::Leave,
        _ => {}
    }
    BrowserAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(browser: &mut FileBrowser, files: &[String], code: KeyCode) -> BrowserAction {
        handle_key_event(browser, files, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_opens_selected() {
        let files = vec!["a".to_string(), "b".to_string()];
        let mut browser = FileBrowser::new();
        press(&mut browser, &files, KeyCode::Down);
        assert_eq!(
            press(&mut browser, &files, KeyCode::Enter),
            BrowserAction::Open("b".to_string())
        );
    }

    #[test]
    fn test_enter_on_empty_listing_does_nothing() {
        let mut browser = FileBrowser::new();
        assert_eq!(press(&mut browser, &[], KeyCode::Enter), BrowserAction::None);
    }

    #[test]
    fn test_history_and_leave_keys() {
        let mut browser = FileBrowser::new();
        assert_eq!(press(&mut browser, &[], KeyCode::Backspace), BrowserAction::Back);
        assert_eq!(press(&mut browser, &[], KeyCode::Left), BrowserAction::Back);
        assert_eq!(press(&mut browser, &[], KeyCode::Right), BrowserAction::Forward);
        assert_eq!(press(&mut browser, &[], KeyCode::Esc), BrowserAction::Leave);
    }
}
