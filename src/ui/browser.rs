//! File list of the current directory.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget};

use crate::ui::theme::Theme;

/// Selection inside the listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBrowser {
    selected: usize,
}

impl FileBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside a listing of `len` entries.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn selected_entry<'f>(&self, files: &'f [String]) -> Option<&'f str> {
        files.get(self.selected).map(String::as_str)
    }
}

pub struct BrowserView<'a> {
    pub browser: &'a FileBrowser,
    pub files: &'a [String],
    pub dir: &'a str,
    /// The listing is for a directory the user has since left.
    pub loading: bool,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for BrowserView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading {
            format!(" {} ... ", self.dir)
        } else {
            format!(" {} ", self.dir)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .style(self.theme.base())
            .title(Line::from(title).style(self.theme.text()));

        if self.files.is_empty() {
            Paragraph::new("(empty)")
                .style(self.theme.dim())
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .files
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let mut state = ListState::default();
        if self.focused {
            state.select(Some(self.browser.selected()));
        }
        let list = List::new(items)
            .style(self.theme.text())
            .highlight_symbol("> ")
            .highlight_style(self.theme.highlight())
            .block(block);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
