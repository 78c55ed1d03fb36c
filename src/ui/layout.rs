//! Screen layout.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the file browser column, borders included.
const BROWSER_WIDTH: u16 = 30;
/// Height of the prompt box, borders included.
const PROMPT_HEIGHT: u16 = 3;

/// Areas of every pane for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub full_area: Rect,
    pub tabs: Rect,
    pub browser: Rect,
    pub output: Rect,
    pub prompt: Rect,
    pub hints: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [tabs, body, hints] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // tab bar
                Constraint::Min(PROMPT_HEIGHT + 1),
                Constraint::Length(1), // key hints
            ])
            .areas(area);

        let [browser, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BROWSER_WIDTH), Constraint::Min(20)])
            .areas(body);

        let [output, prompt] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(PROMPT_HEIGHT)])
            .areas(right);

        Self {
            full_area: area,
            tabs,
            browser,
            output,
            prompt,
            hints,
        }
    }
}
