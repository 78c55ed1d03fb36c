//! Console state: where the user is, which tab is showing, what was typed.
//!
//! Everything in here is plain data with methods. Nothing touches the
//! terminal or the filesystem, so it can be driven directly from tests.

mod history;
mod navigation;
mod tabs;


pub use history::History;
pub use navigation::{Lister, NavEvent, NavigationState, ROOT_DIR};
pub use tabs::{Session, Tab, TabId};
