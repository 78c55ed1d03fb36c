//! The console controller.
//!
//! `Console` owns the tabs, the navigation history, the prompt history and
//! the listing of the current directory. User intents go in as method calls;
//! anything that needs the OS comes back out as an [`Effect`] for the app to
//! run in the background. Results return through [`Console::deliver`] and
//! friends, addressed to the tab that was active when the work was issued.

use std::path::{Path, PathBuf};

use crate::command::{Command, Step, dispatch};
use crate::context::{History, NavEvent, NavigationState, Session, TabId};

pub const WELCOME: &str = "Welcome to Matrix Terminal! Type \"bore bore bore\" for a surprise 🐍";

/// Background work requested by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a shell command and deliver its output to `tab`.
    Execute {
        tab: TabId,
        command: String,
        cwd: String,
    },
    /// Read `resolved` and open the editor on it.
    LoadEditor {
        tab: TabId,
        path: String,
        resolved: PathBuf,
    },
    /// Start the snake game.
    LaunchGame { tab: TabId },
    /// List `candidate` to find out whether `entry` is a folder.
    Probe { entry: String, candidate: String },
    /// Re-list `dir` for the file browser.
    Refresh { dir: String },
    /// Write the editor buffer.
    Save {
        tab: TabId,
        path: String,
        resolved: PathBuf,
        content: String,
    },
    /// Write the editor buffer, then run it with bash.
    SaveAndRun {
        tab: TabId,
        path: String,
        resolved: PathBuf,
        content: String,
        cwd: String,
    },
}

#[derive(Debug)]
pub struct Console {
    session: Session,
    nav: NavigationState,
    input_history: History,
    /// Entries of `listed_dir`, shown in the file browser.
    files: Vec<String>,
    listed_dir: Option<String>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(crate::context::ROOT_DIR)
    }
}

impl Console {
    pub fn new(start_dir: impl Into<String>) -> Self {
        let mut session = Session::new();
        session.append_output(WELCOME);
        Self {
            session,
            nav: NavigationState::new(start_dir),
            input_history: History::new(),
            files: Vec::new(),
            listed_dir: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_dir(&self) -> &str {
        self.nav.current_dir()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Whether `files` belongs to the current directory yet.
    pub fn listing_is_current(&self) -> bool {
        self.listed_dir.as_deref() == Some(self.nav.current_dir())
    }

    pub fn input_history_mut(&mut self) -> &mut History {
        &mut self.input_history
    }

    /// Handle a submitted prompt line.
    pub fn submit(&mut self, raw: &str) -> Vec<Effect> {
        self.input_history.push(raw);
        let Some(command) = Command::parse(raw) else {
            return Vec::new();
        };
        tracing::debug!("Dispatching {:?}", command);

        let tab = self.session.active_id();
        let mut effects = Vec::new();
        for step in dispatch(command) {
            match step {
                Step::Print(line) => self.session.append_output(line),
                Step::Execute(command) => effects.push(Effect::Execute {
                    tab,
                    command,
                    cwd: self.nav.current_dir().to_string(),
                }),
                Step::Edit(path) => {
                    let resolved = self.resolve(&path);
                    effects.push(Effect::LoadEditor {
                        tab,
                        path,
                        resolved,
                    });
                }
                Step::LaunchGame => effects.push(Effect::LaunchGame { tab }),
            }
        }
        effects
    }

    /// Append a result for `tab`.
    pub fn deliver(&mut self, tab: TabId, text: impl Into<String>) {
        self.session.append_to(tab, text);
    }

    /// Append a line to the active tab.
    pub fn print(&mut self, text: impl Into<String>) {
        self.session.append_output(text);
    }

    /// `path` as seen from the current directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() || self.nav.current_dir() == crate::context::ROOT_DIR {
            p.to_path_buf()
        } else {
            Path::new(self.nav.current_dir()).join(p)
        }
    }

    // ---------------------------------------------------------------------
    // Tabs
    // ---------------------------------------------------------------------

    pub fn new_tab(&mut self) -> TabId {
        self.session.create_tab()
    }

    pub fn switch_to_position(&mut self, position: usize) -> bool {
        self.session.switch_to_position(position)
    }

    pub fn next_tab(&mut self) {
        self.session.next_tab();
    }

    pub fn previous_tab(&mut self) {
        self.session.previous_tab();
    }

    pub fn close_active_tab(&mut self) -> bool {
        let id = self.session.active_id();
        self.session.close_tab(id)
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// List the current directory for the browser.
    pub fn refresh(&self) -> Effect {
        Effect::Refresh {
            dir: self.nav.current_dir().to_string(),
        }
    }

    /// Start opening `entry` of the current directory.
    pub fn open_entry(&self, entry: &str) -> Effect {
        Effect::Probe {
            entry: entry.to_string(),
            candidate: self.nav.candidate(entry),
        }
    }

    /// Finish opening an entry once its candidate path has been listed.
    pub fn resolve_probe(&mut self, entry: &str, candidate: String, listing: &[String]) -> Option<Effect> {
        let event = self.nav.enter_probed(entry, candidate, listing);
        self.after_navigation(event)
    }

    pub fn go_back(&mut self) -> Option<Effect> {
        let event = self.nav.go_back();
        self.after_navigation(event)
    }

    pub fn go_forward(&mut self) -> Option<Effect> {
        let event = self.nav.go_forward();
        self.after_navigation(event)
    }

    fn after_navigation(&mut self, event: NavEvent) -> Option<Effect> {
        let moved = event.moved();
        self.session.append_output(event.to_string());
        if !moved {
            return None;
        }
        // Entries of the old directory must not be opened against the new one.
        self.files.clear();
        self.listed_dir = None;
        Some(self.refresh())
    }

    /// Store a directory listing. Stale listings for a directory the user
    /// has already left are dropped.
    pub fn set_listing(&mut self, dir: &str, entries: Vec<String>) -> bool {
        if dir != self.nav.current_dir() {
            tracing::debug!("Dropping stale listing of {:?}", dir);
            return false;
        }
        self.listed_dir = Some(dir.to_string());
        self.files = entries;
        true
    }

    // ---------------------------------------------------------------------
    // Editor
    // ---------------------------------------------------------------------

    /// Save the buffer; the notice goes to `tab`, the tab that ran `nano`.
    pub fn save_editor(&self, tab: TabId, path: &str, resolved: PathBuf, content: String) -> Effect {
        Effect::Save {
            tab,
            path: path.to_string(),
            resolved,
            content,
        }
    }

    /// Save, then run the script with bash from the current directory.
    pub fn run_editor(&mut self, tab: TabId, path: &str, resolved: PathBuf, content: String) -> Effect {
        self.session.append_to(tab, format!("Running: {}", path));
        Effect::SaveAndRun {
            tab,
            path: path.to_string(),
            resolved,
            content,
            cwd: self.nav.current_dir().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MATRIX_BANNER;

    fn execute_count(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Execute { .. }))
            .count()
    }

    fn active_lines(console: &Console) -> Vec<String> {
        console.session().active_tab().history().to_vec()
    }

    #[test]
    fn test_starts_with_welcome() {
        let console = Console::default();
        assert_eq!(active_lines(&console), vec![WELCOME.to_string()]);
    }

    #[test]
    fn test_matrix_appends_one_line_and_runs_nothing() {
        let mut console = Console::default();
        let before = active_lines(&console).len();

        let effects = console.submit("matrix");

        assert_eq!(execute_count(&effects), 0);
        assert!(effects.is_empty());
        let lines = active_lines(&console);
        assert_eq!(lines.len(), before + 1);
        assert_eq!(lines.last().unwrap(), MATRIX_BANNER);
    }

    #[test]
    fn test_game_trigger_launches_without_executing() {
        let mut console = Console::default();
        let tab = console.session().active_id();

        let effects = console.submit("  BORE BORE BORE  ");
        assert_eq!(effects, vec![Effect::LaunchGame { tab }]);
        assert!(!active_lines(&console).iter().any(|l| l.starts_with("> ")));
    }

    #[test]
    fn test_shell_command_echoes_and_executes_in_current_dir() {
        let mut console = Console::default();
        let tab = console.session().active_id();

        let effects = console.submit("ls -la");
        assert_eq!(
            effects,
            vec![Effect::Execute {
                tab,
                command: "ls -la".to_string(),
                cwd: ".".to_string(),
            }]
        );
        assert_eq!(active_lines(&console).last().unwrap(), "> ls -la");
    }

    #[test]
    fn test_blank_line_does_nothing() {
        let mut console = Console::default();
        let before = active_lines(&console);
        assert!(console.submit("   ").is_empty());
        assert_eq!(active_lines(&console), before);
    }

    #[test]
    fn test_result_lands_in_issuing_tab() {
        let mut console = Console::default();
        let first = console.session().active_id();
        let effects = console.submit("echo hi");
        let Effect::Execute { tab, .. } = effects[0].clone() else {
            panic!("expected Execute");
        };

        let second = console.new_tab();
        console.deliver(tab, "hi\n");

        assert_eq!(console.session().active_id(), second);
        assert!(console.session().active_tab().history().is_empty());
        let first_tab = console.session().get(first).unwrap();
        assert_eq!(first_tab.history().last().unwrap(), "hi\n");
    }

    #[test]
    fn test_nano_resolves_against_current_dir() {
        let mut console = Console::default();
        let probe = console.open_entry("src");
        assert_eq!(
            probe,
            Effect::Probe {
                entry: "src".to_string(),
                candidate: "src".to_string()
            }
        );
        console.resolve_probe("src", "src".to_string(), &["main.rs".to_string()]);

        let effects = console.submit("nano main.rs");
        let Some(Effect::LoadEditor { path, resolved, .. }) = effects.first() else {
            panic!("expected LoadEditor, got {effects:?}");
        };
        assert_eq!(path, "main.rs");
        assert_eq!(resolved, &PathBuf::from("src/main.rs"));
        assert_eq!(
            active_lines(&console).last().unwrap(),
            "Opening nano editor for: main.rs"
        );
    }

    #[test]
    fn test_navigation_reports_and_refreshes() {
        let mut console = Console::default();

        assert_eq!(console.go_back(), None);
        assert_eq!(active_lines(&console).last().unwrap(), "No previous folder");

        let refresh = console.resolve_probe("sub", "sub".to_string(), &["x".to_string()]);
        assert_eq!(refresh, Some(Effect::Refresh { dir: "sub".to_string() }));
        assert_eq!(console.current_dir(), "sub");
        assert_eq!(
            active_lines(&console).last().unwrap(),
            "Changed directory to: sub"
        );

        assert_eq!(console.go_back(), Some(Effect::Refresh { dir: ".".to_string() }));
        assert_eq!(console.go_forward(), Some(Effect::Refresh { dir: "sub".to_string() }));
        assert_eq!(console.go_forward(), None);
        assert_eq!(active_lines(&console).last().unwrap(), "No next folder");
    }

    #[test]
    fn test_probe_of_file_keeps_directory() {
        let mut console = Console::default();
        assert_eq!(console.resolve_probe("a.txt", "a.txt".to_string(), &[]), None);
        assert_eq!(console.current_dir(), ".");
        assert_eq!(active_lines(&console).last().unwrap(), "Opened file: a.txt");
    }

    #[test]
    fn test_stale_listing_is_dropped() {
        let mut console = Console::default();
        assert!(console.set_listing(".", vec!["a".to_string()]));
        assert!(!console.set_listing("elsewhere", vec!["b".to_string()]));
        assert_eq!(console.files(), &["a".to_string()]);
    }

    #[test]
    fn test_run_editor_announces_and_carries_cwd() {
        let mut console = Console::default();
        let tab = console.session().active_id();
        let effect = console.run_editor(tab, "go.sh", PathBuf::from("go.sh"), "echo hi".to_string());

        assert_eq!(active_lines(&console).last().unwrap(), "Running: go.sh");
        let Effect::SaveAndRun { cwd, content, .. } = effect else {
            panic!("expected SaveAndRun");
        };
        assert_eq!(cwd, ".");
        assert_eq!(content, "echo hi");
    }

    #[test]
    fn test_editor_results_go_to_opening_tab() {
        let mut console = Console::default();
        let opener = console.session().active_id();
        let other = console.new_tab();

        let saved = console.save_editor(opener, "a.txt", PathBuf::from("a.txt"), String::new());
        assert!(matches!(saved, Effect::Save { tab, .. } if tab == opener));

        let run = console.run_editor(opener, "go.sh", PathBuf::from("go.sh"), String::new());
        assert!(matches!(run, Effect::SaveAndRun { tab, .. } if tab == opener));
        assert_eq!(console.session().active_id(), other);
        assert!(active_lines(&console).is_empty());
        let opener_lines = console.session().get(opener).unwrap().history();
        assert_eq!(opener_lines.last().unwrap(), "Running: go.sh");
    }

    #[test]
    fn test_moving_drops_old_listing() {
        let mut console = Console::default();
        console.set_listing(".", vec!["a.txt".to_string(), "sub".to_string()]);

        let effect = console.resolve_probe("sub", "sub".to_string(), &["x".to_string()]);
        assert_eq!(effect, Some(Effect::Refresh { dir: "sub".to_string() }));
        assert!(console.files().is_empty());
        assert!(!console.listing_is_current());

        assert!(console.set_listing("sub", vec!["x".to_string()]));
        assert_eq!(console.files(), &["x".to_string()]);
        assert!(console.listing_is_current());
    }

    #[test]
    fn test_closing_last_tab_keeps_console_usable() {
        let mut console = Console::default();
        assert!(!console.close_active_tab());
        console.print("still here");
        assert_eq!(active_lines(&console).last().unwrap(), "still here");
    }
}
