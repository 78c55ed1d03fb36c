//! User interface module for the TUI application.
//!
//! Every pane is a small widget borrowing the state it shows. [`App`] draws
//! them into the areas of [`layout::AppLayout`], then puts the editor or the
//! settings overlay on top.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{App, Focus};

pub mod browser;
pub mod editor;
pub mod layout;
pub mod output;
pub mod prompt;
pub mod settings;
pub mod snake;
pub mod tabs;
pub mod theme;

use browser::BrowserView;
use output::OutputView;
use prompt::PromptView;
use snake::BoardView;
use tabs::TabBar;

const COMMAND_HINTS: &str =
    "t new  w close  n/p next/prev  1-9 jump  f files  [ ] back/fwd  s settings  l redraw  q quit";
const PROMPT_HINTS: &str = "Enter run  ↑↓ history  PgUp/PgDn scroll  ^B commands";
const BROWSER_HINTS: &str = "↑↓ select  Enter open  ← back  → forward  Esc prompt  ^B commands";
const GAME_HINTS: &str = "arrows steer  Esc stop  ^B commands";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout_for(area);
        let theme = &self.theme;
        buf.set_style(area, theme.base());

        TabBar {
            session: self.console.session(),
            theme,
        }
        .render(layout.tabs, buf);

        BrowserView {
            browser: &self.browser,
            files: self.console.files(),
            dir: self.console.current_dir(),
            loading: !self.console.listing_is_current(),
            focused: self.focus() == Focus::Browser,
            theme,
        }
        .render(layout.browser, buf);

        let tab = self.console.session().active_tab();
        match self.arcade.board() {
            Some(game) => BoardView { game, theme }.render(layout.output, buf),
            None => OutputView {
                history: tab.history(),
                scroll: self.scroll,
                title: &tab.name,
                theme,
            }
            .render(layout.output, buf),
        }

        PromptView {
            input: &self.prompt,
            cwd: self.console.current_dir(),
            focused: self.focus() == Focus::Prompt,
            theme,
        }
        .render(layout.prompt, buf);

        let hints = if self.is_command_mode() {
            COMMAND_HINTS
        } else if self.arcade.is_showing() {
            GAME_HINTS
        } else {
            match self.focus() {
                Focus::Prompt => PROMPT_HINTS,
                Focus::Browser => BROWSER_HINTS,
            }
        };
        let mode = if self.is_command_mode() { " COMMAND " } else { " MATRIX " };
        Paragraph::new(Line::from(vec![
            Span::styled(mode, theme.highlight()),
            Span::styled(format!(" {}", hints), theme.dim()),
        ]))
        .render(layout.hints, buf);

        if let Some((_, editor)) = &self.editor {
            editor.render_overlay(area, buf, theme);
        }
        if let Some(panel) = &self.settings {
            panel.render_overlay(area, buf, theme);
        }
    }
}
