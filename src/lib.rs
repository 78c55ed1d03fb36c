//! Matrix Terminal: a full-screen fake shell.
//!
//! This library provides the pieces behind the `matrix-term` binary:
//! - Navigation, tab and prompt-history state (`context`)
//! - Prompt line routing (`command`) and the controller tying it together (`console`)
//! - Background command execution and file access (`shell`, `event::worker`)
//! - The `bore bore bore` snake game (`game`)
//! - The ratatui front end (`ui`, `app`)
//!
//! # Example
//!
//! ```no_run
//! use matrix_term::console::{Console, Effect};
//!
//! let mut console = Console::default();
//! for effect in console.submit("ls -la") {
//!     if let Effect::Execute { tab, command, cwd } = effect {
//!         // run `command` in `cwd`, then:
//!         console.deliver(tab, format!("ran {command} in {cwd}"));
//!     }
//! }
//! ```

pub mod app;
pub mod command;
pub mod config;
pub mod console;
pub mod context;
pub mod event;
pub mod game;
pub mod shell;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, Focus};
pub use command::{Command, Step};
pub use config::AppConfig;
pub use console::{Console, Effect};
pub use context::{NavigationState, Session, TabId};
pub use event::{AppEvent, UserEvent, init_app_eventsource, init_user_event};
