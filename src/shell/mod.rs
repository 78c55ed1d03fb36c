//! OS-facing services: running commands and touching files.
//!
//! These are thin wrappers. Failures come back as display strings, never as
//! errors, so callers can always put the result straight into a tab.

mod executor;
pub mod fs;

pub use executor::{DEFAULT_SHELL, Executor};
pub use fs::WriteStatus;
