//! Rendering seam between the submission pipeline and the terminal.

use super::Spinner;
use crate::session::{Speaker, TranscriptEntry};

/// Callbacks the submission pipeline issues after each state change,
/// so the render always reflects the latest session state.
pub trait SessionView {
    /// Called after an entry is appended to the transcript.
    fn entry_appended(&mut self, entry: &TranscriptEntry);

    /// Called when the busy flag flips.
    fn busy_changed(&mut self, busy: bool);
}

/// Renders session changes incrementally to the terminal.
///
/// Assistant entries go to stdout (pipeable). The busy indicator is an
/// ephemeral spinner on stderr; it is derived UI state, never part of
/// the transcript.
#[derive(Default)]
pub struct TerminalView {
    spinner: Option<Spinner>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionView for TerminalView {
    fn entry_appended(&mut self, entry: &TranscriptEntry) {
        match entry.speaker() {
            // The answered prompt already shows the user's line.
            Speaker::User => {}
            Speaker::Assistant => {
                // Clear the spinner before printing so the answer does
                // not interleave with the tick redraws.
                if let Some(spinner) = self.spinner.take() {
                    spinner.stop();
                }
                println!("{}", entry.text());
                println!();
            }
        }
    }

    fn busy_changed(&mut self, busy: bool) {
        if busy {
            self.spinner = Some(Spinner::new("Thinking..."));
        } else if let Some(spinner) = self.spinner.take() {
            spinner.stop();
        }
    }
}
