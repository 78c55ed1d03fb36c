//! The output pane: the active tab's history, wrapped and pinned to the bottom.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::theme::Theme;

/// How far the user has scrolled up from the newest line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputScroll {
    back: usize,
}

impl OutputScroll {
    pub fn back(&self) -> usize {
        self.back
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.back = self.back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.back = self.back.saturating_sub(lines);
    }

    /// Jump back to the newest line.
    pub fn reset(&mut self) {
        self.back = 0;
    }
}

/// Split history entries into screen rows of at most `width` columns.
/// An entry with embedded newlines yields one row per line; a trailing
/// newline does not add an empty row.
pub fn wrap_history(history: &[String], width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    for entry in history {
        if entry.is_empty() {
            rows.push(String::new());
            continue;
        }
        for line in entry.lines() {
            rows.extend(textwrap::wrap(line, width).into_iter().map(|c| c.into_owned()));
        }
    }
    rows
}

/// Index range of the rows to show in `height` rows, `back` rows above the
/// bottom. `back` is clamped to the top of the history.
pub fn visible_range(total: usize, height: usize, back: usize) -> std::ops::Range<usize> {
    let max_back = total.saturating_sub(height);
    let end = total - back.min(max_back);
    end.saturating_sub(height)..end
}

pub struct OutputView<'a> {
    pub history: &'a [String],
    pub scroll: OutputScroll,
    pub title: &'a str,
    pub theme: &'a Theme,
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = format!(" {} ", self.title);
        if self.scroll.back() > 0 {
            title.push_str("[scrolled] ");
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(false))
            .style(self.theme.base())
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = wrap_history(self.history, inner.width);
        let range = visible_range(rows.len(), usize::from(inner.height), self.scroll.back());
        let lines: Vec<Line> = rows[range].iter().map(|r| Line::from(r.as_str())).collect();
        Paragraph::new(lines)
            .style(self.theme.text())
            .render(inner, buf);
    }
}
