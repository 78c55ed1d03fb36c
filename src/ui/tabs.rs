use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Tabs, Widget};

use crate::context::Session;
use crate::ui::theme::Theme;

pub struct TabBar<'a> {
    pub session: &'a Session,
    pub theme: &'a Theme,
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.session.active_id();
        let titles: Vec<Line> = self
            .session
            .tabs()
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{}:{}", i + 1, tab.name)))
            .collect();
        let selected = self
            .session
            .tabs()
            .iter()
            .position(|t| t.id == active)
            .unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .style(self.theme.dim())
            .highlight_style(self.theme.highlight())
            .divider("|")
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_tab() {
        let mut session = Session::new();
        session.create_tab();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBar {
            session: &session,
            theme: &theme,
        }
        .render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("1:Tab 1"), "{row:?}");
        assert!(row.contains("2:Tab 2"), "{row:?}");
    }
}
