//! Interactive chat mode.
//!
//! Provides a REPL-style interface with slash commands on top of the
//! session controller.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatConfig, ChatSession};
