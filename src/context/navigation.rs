//! Directory navigation with back/forward history.
//!
//! Paths are kept as the strings the user walked through (`.`, `src`,
//! `src/ui`, ...), the same values handed to the executor as its working
//! directory.

use std::fmt;

/// Directory used before any navigation happened.
pub const ROOT_DIR: &str = ".";

/// Anything that can list the entries of a directory.
///
/// An empty listing means "not a directory" to the navigator, which is also
/// what an empty directory looks like.
pub trait Lister {
    fn list_files(&self, dir: &str) -> Vec<String>;
}

impl<F> Lister for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn list_files(&self, dir: &str) -> Vec<String> {
        self(dir)
    }
}

/// Outcome of a navigation request, rendered as the notice line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Entered(String),
    OpenedFile(String),
    WentBack(String),
    WentForward(String),
    NoPrevious,
    NoNext,
}

impl NavEvent {
    /// Whether the current directory changed.
    pub fn moved(&self) -> bool {
        matches!(
            self,
            NavEvent::Entered(_) | NavEvent::WentBack(_) | NavEvent::WentForward(_)
        )
    }
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::Entered(dir) => write!(f, "Changed directory to: {}", dir),
            NavEvent::OpenedFile(name) => write!(f, "Opened file: {}", name),
            NavEvent::WentBack(dir) => write!(f, "Went back to: {}", dir),
            NavEvent::WentForward(dir) => write!(f, "Went forward to: {}", dir),
            NavEvent::NoPrevious => f.write_str("No previous folder"),
            NavEvent::NoNext => f.write_str("No next folder"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    current_dir: String,
    history: Vec<String>,
    index: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ROOT_DIR)
    }
}

impl NavigationState {
    pub fn new(start_dir: impl Into<String>) -> Self {
        let start_dir = start_dir.into();
        Self {
            current_dir: start_dir.clone(),
            history: vec![start_dir],
            index: 0,
        }
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Path an entry of the current directory resolves to.
    pub fn candidate(&self, entry: &str) -> String {
        if self.current_dir == ROOT_DIR {
            entry.to_string()
        } else {
            format!("{}/{}", self.current_dir, entry)
        }
    }

    /// Open `entry`, probing it with `lister` to tell folders from files.
    pub fn navigate_into<L: Lister + ?Sized>(&mut self, entry: &str, lister: &L) -> NavEvent {
        let candidate = self.candidate(entry);
        let listing = lister.list_files(&candidate);
        self.enter_probed(entry, candidate, &listing)
    }

    /// Second half of [`navigate_into`](Self::navigate_into), for callers that
    /// listed `candidate` themselves (off the UI thread).
    pub fn enter_probed(&mut self, entry: &str, candidate: String, listing: &[String]) -> NavEvent {
        if listing.is_empty() {
            return NavEvent::OpenedFile(entry.to_string());
        }

        self.history.truncate(self.index + 1);
        self.history.push(candidate.clone());
        self.index += 1;
        self.current_dir = candidate.clone();
        NavEvent::Entered(candidate)
    }

    pub fn go_back(&mut self) -> NavEvent {
        if self.index == 0 {
            return NavEvent::NoPrevious;
        }
        self.index -= 1;
        self.current_dir = self.history[self.index].clone();
        NavEvent::WentBack(self.current_dir.clone())
    }

    pub fn go_forward(&mut self) -> NavEvent {
        if self.index + 1 >= self.history.len() {
            return NavEvent::NoNext;
        }
        self.index += 1;
        self.current_dir = self.history[self.index].clone();
        NavEvent::WentForward(self.current_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_tree(dir: &str) -> Vec<String> {
        match dir {
            "sub" => vec!["inner".to_string(), "notes.txt".to_string()],
            "sub/inner" => vec!["deep.rs".to_string()],
            "other" => vec!["a".to_string()],
            _ => Vec::new(),
        }
    }

    fn assert_invariant(nav: &NavigationState) {
        assert!(nav.index() < nav.history().len());
        assert_eq!(nav.history()[nav.index()], nav.current_dir());
    }

    #[test]
    fn test_back_and_forward_at_start_do_nothing() {
        let mut nav = NavigationState::default();

        assert_eq!(nav.go_back(), NavEvent::NoPrevious);
        assert_eq!(nav.go_forward(), NavEvent::NoNext);
        assert_eq!(nav.current_dir(), ".");
        assert_eq!(nav.history(), &[".".to_string()]);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_enter_back_forward() {
        let mut nav = NavigationState::default();

        let event = nav.navigate_into("sub", &fake_tree);
        assert_eq!(event, NavEvent::Entered("sub".to_string()));
        assert_eq!(nav.current_dir(), "sub");
        assert_invariant(&nav);

        assert_eq!(nav.go_back(), NavEvent::WentBack(".".to_string()));
        assert_eq!(nav.current_dir(), ".");
        assert_invariant(&nav);

        assert_eq!(nav.go_forward(), NavEvent::WentForward("sub".to_string()));
        assert_eq!(nav.current_dir(), "sub");
        assert_invariant(&nav);
    }

    #[test]
    fn test_nested_candidate_joins_with_slash() {
        let mut nav = NavigationState::default();
        nav.navigate_into("sub", &fake_tree);

        assert_eq!(nav.candidate("inner"), "sub/inner");
        let event = nav.navigate_into("inner", &fake_tree);
        assert_eq!(event, NavEvent::Entered("sub/inner".to_string()));
        assert_eq!(nav.history().len(), 3);
    }

    #[test]
    fn test_file_does_not_move() {
        let mut nav = NavigationState::default();
        nav.navigate_into("sub", &fake_tree);

        let event = nav.navigate_into("notes.txt", &fake_tree);
        assert_eq!(event, NavEvent::OpenedFile("notes.txt".to_string()));
        assert_eq!(event.to_string(), "Opened file: notes.txt");
        assert!(!event.moved());
        assert_eq!(nav.current_dir(), "sub");
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_empty_directory_is_treated_as_file() {
        let mut nav = NavigationState::default();
        let empty = |_: &str| Vec::<String>::new();

        let event = nav.navigate_into("empty_dir", &empty);
        assert_eq!(event, NavEvent::OpenedFile("empty_dir".to_string()));
        assert_eq!(nav.current_dir(), ".");
    }

    #[test]
    fn test_entering_truncates_forward_history() {
        let mut nav = NavigationState::default();
        nav.navigate_into("sub", &fake_tree);
        nav.navigate_into("inner", &fake_tree);
        nav.go_back();
        nav.go_back();
        assert_eq!(nav.current_dir(), ".");

        nav.navigate_into("other", &fake_tree);
        assert_eq!(nav.history(), &[".".to_string(), "other".to_string()]);
        assert_eq!(nav.go_forward(), NavEvent::NoNext);
        assert_invariant(&nav);
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(NavEvent::NoPrevious.to_string(), "No previous folder");
        assert_eq!(NavEvent::NoNext.to_string(), "No next folder");
        assert_eq!(
            NavEvent::Entered("a/b".to_string()).to_string(),
            "Changed directory to: a/b"
        );
    }
}
