//! Interactive chat mode for question-answering sessions.
//!
//! Provides a REPL-style interface with slash commands for switching
//! documents, clearing the chat, and exporting the transcript.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ChatSession;
pub use ui::render_transcript;
