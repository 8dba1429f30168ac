//! Terminal to-do list: a JSON-backed task store, a bordered text table and
//! a single-keypress controller.

pub mod config;
pub mod store;
pub mod tui;

/// Build version, set by build.rs.
pub const VERSION: &str = env!("TODOLIST_VERSION");
