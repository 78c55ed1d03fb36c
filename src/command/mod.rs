//! Prompt commands: parsing and dispatch.
//!
//! A prompt line is first parsed into a [`Command`], then [`dispatch`] maps it
//! to the [`Step`]s the console has to carry out. Both halves are pure, so
//! the routing rules can be tested without a shell or a terminal.

mod parser;

/// Decorative line printed by `matrix`.
pub const MATRIX_BANNER: &str = "🟢🟩🟢🟩🟢 Matrix mode!";
/// Notice printed when the snake game is launched.
pub const GAME_BANNER: &str = "🐍 Snake game starting... (easter egg)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `bore bore bore`
    RunGame,
    /// `matrix`
    ShowMatrix,
    /// `nano <path>`
    OpenEditor(String),
    /// `bash <path>`
    RunScript(String),
    /// Anything else, passed to the shell verbatim.
    RunShell(String),
}

/// One thing the console must do for a command, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Append a line to the output.
    Print(String),
    /// Run a shell command in the current directory and print its output.
    Execute(String),
    /// Load a file and open the editor on it.
    Edit(String),
    /// Start (or restart) the snake game.
    LaunchGame,
}

pub fn dispatch(command: Command) -> Vec<Step> {
    match command {
        Command::RunGame => vec![Step::Print(GAME_BANNER.to_string()), Step::LaunchGame],
        Command::ShowMatrix => vec![Step::Print(MATRIX_BANNER.to_string())],
        Command::OpenEditor(path) => vec![
            Step::Print(format!("Opening nano editor for: {}", path)),
            Step::Edit(path),
        ],
        Command::RunScript(path) => vec![
            Step::Print(format!("Running bash file: {}", path)),
            Step::Execute(format!("bash {}", path)),
        ],
        Command::RunShell(raw) => vec![Step::Print(format!("> {}", raw)), Step::Execute(raw)],
    }
}
