//! Runs prompt commands to completion in a separate shell process.
//!
//! There is no PTY here: the command gets no stdin, runs until it exits, and
//! everything it printed comes back as one string.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

/// Shell used with `-c` when none is configured.
pub const DEFAULT_SHELL: &str = "/bin/sh";

#[derive(Clone, Debug)]
pub struct Executor {
    shell: String,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl Executor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Run `command` in `cwd` and return what should be shown for it.
    ///
    /// - success: stdout (possibly empty)
    /// - non-zero exit: stderr, or `Command failed: <command>` when stderr is empty
    /// - spawn failure: the error message
    ///
    /// Never fails; every outcome is a displayable string.
    pub async fn run_command(&self, command: &str, cwd: &str) -> String {
        let mut c = Command::new(&self.shell);
        c.arg("-c").arg(command);
        if !cwd.is_empty() {
            c.current_dir(cwd);
        }
        c.stdin(Stdio::null());

        let output = match c.output().await {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to spawn {:?} in {:?}: {}", command, cwd, e);
                return e.to_string();
            }
        };

        debug!("{:?} in {:?} exited with {}", command, cwd, output.status);

        let text = if output.status.success() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else if !output.stderr.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            format!("Command failed: {}", command)
        };
        strip_ansi_codes(&text)
    }
}

/// Strip ANSI escape codes from text.
/// The output pane shows plain text, so colour codes and cursor movements
/// would only show up as garbage.
fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // CSI: parameters until a letter terminator
                while let Some(next_ch) = chars.next() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                // OSC: until BEL or ST (ESC \)
                while let Some(next_ch) = chars.next() {
                    if next_ch == '\x07' {
                        break;
                    }
                    if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    result
}
