//! Chat mode UI components.

use crate::session::{SessionState, Speaker, TranscriptEntry};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Document Q&A Chat",
        Style::header("dq"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(endpoint: &str, state: &SessionState) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}   {}",
        Style::label("document"),
        state.selected_file().map_or_else(
            || Style::secondary("(none)"),
            |file| Style::value(file.file_name())
        )
    );
    println!(
        "  {}   {}",
        Style::label("messages"),
        Style::value(state.transcript().len())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}    {}",
        Style::command("/file <path>"),
        Style::secondary("Select a document (clears the transcript)")
    );
    println!(
        "  {}          {}",
        Style::command("/clear"),
        Style::secondary("Clear the chat")
    );
    println!(
        "  {}    {}",
        Style::command("/save <path>"),
        Style::secondary("Save the transcript to a file")
    );
    println!(
        "  {}         {}",
        Style::command("/config"),
        Style::secondary("Show current session settings")
    );
    println!(
        "  {}           {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}           {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
    println!(
        "{}",
        Style::hint("Anything else you type is asked about the current document.")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

/// Renders the transcript as plain text, one block per entry.
pub fn render_transcript(entries: &[TranscriptEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let label = match entry.speaker() {
            Speaker::User => "you",
            Speaker::Assistant => "assistant",
        };
        out.push_str(label);
        out.push_str(": ");
        out.push_str(entry.text());
        out.push('\n');
    }
    out
}
