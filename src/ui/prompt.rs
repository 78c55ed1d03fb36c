//! The single-line command prompt.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::Theme;

pub const PROMPT_SYMBOL: &str = "$ ";

/// Line being typed, with a cursor counted in chars.
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    buffer: String,
    cursor: usize,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.buffer.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_index();
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Replace the line, cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.move_end();
    }

    /// Empty the prompt and return what was typed.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Display column of the cursor, prompt symbol included.
    pub fn cursor_column(&self) -> u16 {
        let typed: usize = self
            .buffer
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (PROMPT_SYMBOL.width() + typed).min(u16::MAX as usize) as u16
    }

    /// Columns scrolled off the left so the cursor stays visible in `width`.
    fn scroll_offset(&self, width: u16) -> u16 {
        self.cursor_column().saturating_sub(width.saturating_sub(1))
    }

    /// Screen position of the cursor when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let col = self.cursor_column() - self.scroll_offset(inner.width);
        Position::new(inner.x + col, inner.y)
    }
}

pub struct PromptView<'a> {
    pub input: &'a PromptInput,
    pub cwd: &'a str,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for PromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .style(self.theme.base())
            .title(format!(" {} ", self.cwd));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(PROMPT_SYMBOL, self.theme.highlight()),
            Span::styled(self.input.text(), self.theme.text()),
        ]);
        Paragraph::new(line)
            .scroll((0, self.input.scroll_offset(inner.width)))
            .render(inner, buf);
    }
}
