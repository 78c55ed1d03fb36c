//! The snake board, drawn in place of the output pane.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::game::{Cell, GRID_SIZE, SnakeGame};
use crate::ui::theme::Theme;

/// Each grid cell takes two columns so the board looks square.
const CELL_WIDTH: u16 = 2;

pub struct BoardView<'a> {
    pub game: &'a SnakeGame,
    pub theme: &'a Theme,
}

impl BoardView<'_> {
    fn rows(&self) -> Vec<Line<'static>> {
        let head = self.game.head();
        let food = self.game.food();
        (0..GRID_SIZE)
            .map(|y| {
                let spans: Vec<Span> = (0..GRID_SIZE)
                    .map(|x| {
                        let cell = Cell::new(x, y);
                        if Some(cell) == head {
                            Span::styled("██", self.theme.text())
                        } else if self.game.contains(cell) {
                            Span::styled("▓▓", self.theme.text())
                        } else if cell == food {
                            Span::styled("()", self.theme.base().fg(Color::Red))
                        } else {
                            Span::styled(" .", self.theme.dim())
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = GRID_SIZE as u16;
        let width = (size * CELL_WIDTH + 2).min(area.width);
        let height = (size + 2).min(area.height);
        let board = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let title = if self.game.is_over() {
            format!(" Game over, length {} ", self.game.len())
        } else {
            format!(" Snake, length {} ", self.game.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(true))
            .style(self.theme.base())
            .title(title)
            .title_bottom(Line::from(" arrows steer, Esc quits ").style(Style::default().fg(Color::DarkGray)));

        Paragraph::new(self.rows()).block(block).render(board, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_draws_head_body_and_food() {
        let body = [Cell::new(2, 0), Cell::new(1, 0)];
        let game = SnakeGame::from_parts(body, Direction::Right, Cell::new(4, 0));
        let theme = Theme::default();
        let rows = BoardView {
            game: &game,
            theme: &theme,
        }
        .rows();

        assert_eq!(rows.len(), GRID_SIZE as usize);
        let top: String = rows[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(top.starts_with(" .▓▓██ .()"), "{top:?}");
    }

    #[test]
    fn test_fits_a_small_area() {
        let mut food = crate::game::SplitMix::new(1);
        let game = SnakeGame::new(&mut food);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        BoardView {
            game: &game,
            theme: &theme,
        }
        .render(area, &mut buf);
    }
}
