//! Turning a raw prompt line into a [`Command`].

use super::Command;

const GAME_TRIGGER: &str = "bore bore bore";
const MATRIX_TRIGGER: &str = "matrix";

impl Command {
    /// Parse a prompt line. Blank lines parse to `None`.
    ///
    /// The reserved words are checked before anything else, so a real program
    /// called `matrix` can't be reached from the prompt.
    pub fn parse(raw: &str) -> Option<Command> {
        let normalized = raw.trim().to_lowercase();
        if normalized == GAME_TRIGGER {
            return Some(Command::RunGame);
        }
        if normalized == MATRIX_TRIGGER {
            return Some(Command::ShowMatrix);
        }

        if let Some(path) = keyword_argument(raw, "nano") {
            return Some(Command::OpenEditor(path));
        }
        if let Some(path) = keyword_argument(raw, "bash") {
            return Some(Command::RunScript(path));
        }

        if raw.trim().is_empty() {
            return None;
        }
        Some(Command::RunShell(raw.to_string()))
    }
}

/// Match `<keyword><whitespace><argument>` at the very start of the line and
/// return the trimmed argument. An argument that trims to nothing is no match.
fn keyword_argument(raw: &str, keyword: &str) -> Option<String> {
    let rest = raw.strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let argument = rest.trim();
    if argument.is_empty() {
        return None;
    }
    Some(argument.to_string())
}
