//! The nano-style modal editor.

use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use tui_textarea::TextArea;

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Save,
    Run,
    Close,
}

impl EditorAction {
    fn hint(self) -> &'static str {
        match self {
            EditorAction::Save => "^S Save",
            EditorAction::Run => "^R Run",
            EditorAction::Close => "Esc Close",
        }
    }
}

/// A text buffer bound to one file.
pub struct NanoEditor {
    path: String,
    resolved: PathBuf,
    textarea: TextArea<'static>,
}

impl NanoEditor {
    /// Open `path` with `content` as the initial buffer.
    pub fn open(path: impl Into<String>, content: &str) -> Self {
        let path = path.into();
        let resolved = PathBuf::from(&path);
        Self::open_at(path, resolved, content)
    }

    /// Like [`open`](Self::open), reading and writing `resolved` on disk.
    pub fn open_at(path: impl Into<String>, resolved: PathBuf, content: &str) -> Self {
        // split('\n') rather than lines(): a trailing newline must survive a save.
        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let mut textarea = TextArea::new(lines);
        textarea.set_cursor_line_style(Style::default());
        Self {
            path: path.into(),
            resolved,
            textarea,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    /// Shell scripts can be run straight from the editor.
    pub fn can_run(&self) -> bool {
        self.path.ends_with(".sh")
    }

    pub fn actions(&self) -> Vec<EditorAction> {
        if self.can_run() {
            vec![EditorAction::Save, EditorAction::Run, EditorAction::Close]
        } else {
            vec![EditorAction::Save, EditorAction::Close]
        }
    }

    /// The buffer exactly as it would be written.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Feed a key to the text area. Returns whether the buffer changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Render as a centered overlay on top of `area`.
    pub fn render_overlay(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let popup = centered(area, 70, 70);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .style(theme.base())
            .title(Line::from(format!(" Nano Editor: {} ", self.path)).style(theme.text()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [text_area, footer_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .areas(inner);

        (&self.textarea).render(text_area, buf);

        let mut spans = Vec::new();
        for (i, action) in self.actions().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(action.hint(), theme.highlight()));
        }
        Paragraph::new(Line::from(spans)).render(footer_area, buf);
    }
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
pub(crate) fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(area);
    let [_, center, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(middle);
    center
}
