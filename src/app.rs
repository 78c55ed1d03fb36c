//! Application state management.
//!
//! `App` ties the [`Console`] to the screen. It owns the widgets, the arcade,
//! the config and the event channels, runs the main loop, and turns console
//! effects into background work.

use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc::{Receiver, UnboundedReceiver};
use tracing::{debug, info, warn};

use crate::config::{self, AppConfig};
use crate::console::{Console, Effect};
use crate::context::TabId;
use crate::event::browser::{self as browser_event, BrowserAction};
use crate::event::editor::{self as editor_event, EditorOutcome};
use crate::event::prompt::{self as prompt_event, PromptAction};
use crate::event::settings::{self as settings_event, SettingsOutcome};
use crate::event::worker::Worker;
use crate::event::{AppEvent, UserEvent, init_app_eventsource, init_user_event};
use crate::game::{Arcade, Direction, GAME_OVER_DELAY, GAME_OVER_NOTICE, StepOutcome};
use crate::shell::Executor;
use crate::ui::browser::FileBrowser;
use crate::ui::editor::NanoEditor;
use crate::ui::layout::AppLayout;
use crate::ui::output::OutputScroll;
use crate::ui::prompt::PromptInput;
use crate::ui::settings::SettingsPanel;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    Browser,
}

pub struct App {
    // backend
    pub(crate) console: Console,
    worker: Worker,
    pub(crate) arcade: Arcade,

    // frontend widgets
    pub(crate) prompt: PromptInput,
    pub(crate) browser: FileBrowser,
    pub(crate) scroll: OutputScroll,
    /// The open editor and the tab whose `nano` opened it.
    pub(crate) editor: Option<(TabId, NanoEditor)>,
    pub(crate) settings: Option<SettingsPanel>,

    config: AppConfig,
    config_path: PathBuf,
    pub(crate) theme: Theme,

    // App State
    focus: Focus,
    exit: bool,
    command_mode: bool,      // Leader key pressed, waiting for the command key
    force_redraw_flag: bool, // Clear the screen before the next draw
    layout: AppLayout,

    // events sources
    user_events: Receiver<std::io::Result<UserEvent>>,
    app_events: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Build the app reading input from the terminal.
    /// Must be called from within the tokio runtime.
    pub fn new(config: AppConfig, config_path: PathBuf) -> Self {
        Self::with_user_events(config, config_path, init_user_event())
    }

    /// Build the app reading input from `user_events`.
    pub fn with_user_events(
        config: AppConfig,
        config_path: PathBuf,
        user_events: Receiver<std::io::Result<UserEvent>>,
    ) -> Self {
        let (event_sink, app_events) = init_app_eventsource();
        let executor = Executor::new(config.shell.clone());
        info!("Commands run through {} in {}", executor.shell(), config.start_dir);
        let worker = Worker::new(executor, event_sink);
        let console = Console::new(config.start_dir.clone());
        let theme = Theme::from_config(&config.theme);

        let mut app = Self {
            console,
            worker,
            arcade: Arcade::new(),
            prompt: PromptInput::new(),
            browser: FileBrowser::new(),
            scroll: OutputScroll::default(),
            editor: None,
            settings: None,
            config,
            config_path,
            theme,
            focus: Focus::Prompt,
            exit: false,
            command_mode: false,
            force_redraw_flag: false,
            layout: AppLayout::default(),
            user_events,
            app_events,
        };
        let refresh = app.console.refresh();
        app.perform(refresh);
        app
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_command_mode(&self) -> bool {
        self.command_mode
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Hand an effect to whoever runs it.
    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::LaunchGame { tab } => self.arcade.launch(tab),
            other => self.worker.spawn(other),
        }
    }

    fn perform_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.perform(effect);
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.exit {
                break Ok(());
            }
            tokio::select! {
                res = self.user_events.recv() => {
                    let usr_evt = res.context("User event stream is ended.")?;
                    self.handle_user_event(usr_evt?);
                }
                res = self.app_events.recv() => {
                    let app_evt = res.context("App event stream is ended")?;
                    self.handle_app_event(app_evt);
                }
                _ = self.arcade.tick() => {
                    self.on_tick();
                }
            }
            if self.force_redraw_flag {
                self.force_redraw_flag = false;
                terminal.clear()?;
            }
            self.draw(terminal)?;
        }
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            if self.layout.full_area != area {
                self.layout = AppLayout::new(area);
            }

            use ratatui::widgets::Widget;
            (&*self).render(area, frame.buffer_mut());

            // No position means ratatui hides the cursor.
            if let Some(position) = self.cursor_position() {
                frame.set_cursor_position(position);
            }
        })?;
        Ok(())
    }

    /// Where the hardware cursor goes: only in the prompt, and only when
    /// nothing else has the keyboard.
    fn cursor_position(&self) -> Option<Position> {
        let typing = self.focus == Focus::Prompt
            && !self.command_mode
            && self.editor.is_none()
            && self.settings.is_none()
            && !self.arcade.is_showing();
        typing.then(|| self.prompt.cursor_position(self.layout.prompt))
    }

    pub(crate) fn layout_for(&self, area: Rect) -> AppLayout {
        if self.layout.full_area == area {
            self.layout
        } else {
            AppLayout::new(area)
        }
    }

    fn on_tick(&mut self) {
        if let Some((StepOutcome::GameOver, tab)) = self.arcade.advance() {
            self.worker.notify_later(tab, GAME_OVER_NOTICE, GAME_OVER_DELAY);
        }
    }
}

impl App {
    fn handle_user_event(&mut self, event: UserEvent) {
        match event {
            UserEvent::Key(key_evt) if matches!(key_evt.kind, KeyEventKind::Press) => {
                self.handle_key_event(key_evt);
            }
            // Resize only needs the redraw that follows every event.
            _ => {}
        }
    }

    pub(crate) fn handle_key_event(&mut self, key_evt: KeyEvent) {
        // Overlays take every key while open.
        if let Some((_, editor)) = self.editor.as_mut() {
            let outcome = editor_event::handle_key_event(editor, key_evt);
            self.on_editor_outcome(outcome);
            return;
        }
        if let Some(panel) = self.settings.as_mut() {
            let outcome = settings_event::handle_key_event(panel, key_evt);
            self.on_settings_outcome(outcome);
            return;
        }

        if self.command_mode {
            self.handle_command_mode_key(key_evt);
            return;
        }

        // Ctrl + B => Command Mode
        if key_evt.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_evt.code, KeyCode::Char('b') | KeyCode::Char('B'))
        {
            self.command_mode = true;
            return;
        }

        if self.arcade.is_showing() && self.handle_game_key(key_evt) {
            return;
        }

        match self.focus {
            Focus::Prompt => {
                let action = prompt_event::handle_key_event(
                    &mut self.prompt,
                    self.console.input_history_mut(),
                    &mut self.scroll,
                    key_evt,
                );
                if let PromptAction::Submit(line) = action {
                    let effects = self.console.submit(&line);
                    self.perform_all(effects);
                }
            }
            Focus::Browser => {
                let action = browser_event::handle_key_event(&mut self.browser, self.console.files(), key_evt);
                self.on_browser_action(action);
            }
        }
    }

    /// Arrow keys and Esc belong to the game while its board is up.
    /// Returns whether the key was used.
    fn handle_game_key(&mut self, key_evt: KeyEvent) -> bool {
        let direction = match key_evt.code {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Esc => {
                if self.arcade.stop() {
                    self.console.print("Snake game stopped");
                }
                return true;
            }
            _ => return false,
        };
        self.arcade.steer(direction);
        true
    }

    fn handle_command_mode_key(&mut self, key_evt: KeyEvent) {
        self.command_mode = false;
        let KeyCode::Char(c) = key_evt.code else {
            return;
        };
        match c.to_ascii_lowercase() {
            't' => {
                let id = self.console.new_tab();
                debug!("Opened tab {}", id);
                self.scroll.reset();
            }
            'w' => {
                if self.console.close_active_tab() {
                    self.scroll.reset();
                }
            }
            'n' => {
                self.console.next_tab();
                self.scroll.reset();
            }
            'p' => {
                self.console.previous_tab();
                self.scroll.reset();
            }
            d @ '1'..='9' => {
                let position = d as usize - '0' as usize;
                if self.console.switch_to_position(position) {
                    self.scroll.reset();
                }
            }
            'f' => {
                self.focus = match self.focus {
                    Focus::Prompt => Focus::Browser,
                    Focus::Browser => Focus::Prompt,
                };
            }
            '[' => self.on_browser_action(BrowserAction::Back),
            ']' => self.on_browser_action(BrowserAction::Forward),
            's' => {
                self.settings = Some(SettingsPanel::new(self.config.theme.clone()));
            }
            'l' => self.force_redraw_flag = true,
            'q' => self.exit = true,
            other => debug!("Unbound command key {:?}", other),
        }
    }

    fn on_browser_action(&mut self, action: BrowserAction) {
        let effect = match action {
            BrowserAction::None => None,
            BrowserAction::Open(entry) => Some(self.console.open_entry(&entry)),
            BrowserAction::Back => self.console.go_back(),
            BrowserAction::Forward => self.console.go_forward(),
            BrowserAction::Leave => {
                self.focus = Focus::Prompt;
                None
            }
        };
        if let Some(effect) = effect {
            self.perform(effect);
        }
    }

    fn on_editor_outcome(&mut self, outcome: EditorOutcome) {
        if outcome == EditorOutcome::Continue {
            return;
        }
        let Some((tab, editor)) = self.editor.take() else {
            return;
        };
        let path = editor.path().to_string();
        let resolved = editor.resolved().to_path_buf();
        match outcome {
            EditorOutcome::Save => {
                let effect = self.console.save_editor(tab, &path, resolved, editor.content());
                self.perform(effect);
            }
            EditorOutcome::Run => {
                let effect = self.console.run_editor(tab, &path, resolved, editor.content());
                self.perform(effect);
            }
            EditorOutcome::Close | EditorOutcome::Continue => {
                debug!("Editor closed without saving {}", path);
            }
        }
    }

    fn on_settings_outcome(&mut self, outcome: SettingsOutcome) {
        match outcome {
            SettingsOutcome::Continue => {}
            SettingsOutcome::Changed => {
                if let Some(panel) = &self.settings {
                    self.theme = Theme::from_config(panel.theme());
                }
            }
            SettingsOutcome::Close => {
                let Some(panel) = self.settings.take() else {
                    return;
                };
                if *panel.theme() == self.config.theme {
                    return;
                }
                self.config.theme = panel.theme().clone();
                self.theme = Theme::from_config(&self.config.theme);
                match config::save(&self.config_path, &self.config) {
                    Ok(()) => info!("Saved theme to {}", self.config_path.display()),
                    Err(e) => {
                        warn!("{:#}", e);
                        self.console.print(format!("Could not save settings: {}", e));
                    }
                }
            }
        }
    }
}

impl App {
    pub(crate) fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Output { tab, text } => {
                self.arcade.dismiss_finished();
                self.console.deliver(tab, text);
            }
            AppEvent::Probed {
                entry,
                candidate,
                listing,
            } => {
                if let Some(effect) = self.console.resolve_probe(&entry, candidate, &listing) {
                    self.browser.reset();
                    self.perform(effect);
                }
            }
            AppEvent::Listed { dir, entries } => {
                if self.console.set_listing(&dir, entries) {
                    self.browser.clamp(self.console.files().len());
                }
            }
            AppEvent::EditorLoaded {
                tab,
                path,
                resolved,
                content,
            } => {
                debug!("Editor opened on {} for tab {}", path, tab);
                self.editor = Some((tab, NanoEditor::open_at(path, resolved, &content)));
            }
        }
    }
}
