//! Event handling system for the application.
//!
//! Two channels feed the main loop:
//!
//! - **User events**: keyboard and resize events read from the terminal on a
//!   dedicated thread, so input is never stuck behind other work.
//! - **App events**: results of background work (command output, directory
//!   listings, file loads) coming back to the UI task.
//!
//! # Submodules
//!
//! - `worker`: runs console effects in background tasks
//! - `prompt`, `browser`, `editor`, `settings`: key handling per focus target

pub mod browser;
pub mod editor;
pub mod prompt;
pub mod settings;
pub mod worker;

use std::io::Result;
use std::path::PathBuf;
use std::thread;

use tokio::sync::mpsc::{self, Receiver, UnboundedReceiver, UnboundedSender};

use crate::context::TabId;

/// Type alias for user input events from the terminal.
pub type UserEvent = crossterm::event::Event;

/// Initializes the user event stream.
///
/// Spawns a thread that blocks on `crossterm::event::read()` and forwards
/// every event. The thread ends once the receiver is dropped.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Results of background work, delivered to the UI task.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppEvent {
    /// A line for `tab` (command output, save status, game notices).
    Output { tab: TabId, text: String },

    /// `candidate` was listed while opening `entry`.
    Probed {
        entry: String,
        candidate: String,
        listing: Vec<String>,
    },

    /// Fresh listing of `dir` for the file browser.
    Listed { dir: String, entries: Vec<String> },

    /// File contents are ready for the editor.
    EditorLoaded {
        tab: TabId,
        path: String,
        resolved: PathBuf,
        content: String,
    },
}

/// Initializes the application event channel.
///
/// Unbounded because app events are few and small, and senders live in
/// background tasks that must not block.
pub fn init_app_eventsource() -> (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}
