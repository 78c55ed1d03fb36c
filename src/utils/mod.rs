//! Utility modules for common functionality.
//!
//! Logging configuration and the terminal restore guard.

pub mod logger;
pub mod restore;
