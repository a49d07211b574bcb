use anyhow::{Error, Result};

use super::state::{SessionState, TranscriptEntry};
use crate::backend::Backend;
use crate::document::DocumentFile;
use crate::ui::SessionView;

/// Why a submission was turned away before any state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No document is selected.
    MissingFile,
    /// The pending input is empty after trimming.
    EmptyQuery,
}

/// How one submission round ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A precondition failed; the session was not touched.
    Rejected(Rejection),
    /// Both requests succeeded and the assistant entry was appended.
    Answered,
    /// A request failed; the user entry stays, no assistant entry.
    Failed(Error),
}

/// Runs one question/answer round-trip.
///
/// Validates the session, records the user's message optimistically,
/// uploads the document, asks the question against the extracted text,
/// and appends the assistant's answer. The two requests are strictly
/// sequential: the answer request consumes the upload's output.
///
/// Failures never propagate past this function; they are captured in
/// the returned [`SubmitOutcome`]. The busy flag is released on every
/// exit path past the precondition checks.
pub async fn submit<B, V>(state: &mut SessionState, backend: &B, view: &mut V) -> SubmitOutcome
where
    B: Backend,
    V: SessionView,
{
    // Precondition checks, in order; neither mutates state.
    let Some(file) = state.selected_file().cloned() else {
        return SubmitOutcome::Rejected(Rejection::MissingFile);
    };
    let query = state.pending_input().trim().to_string();
    if query.is_empty() {
        return SubmitOutcome::Rejected(Rejection::EmptyQuery);
    }

    state.set_busy(true);
    view.busy_changed(true);

    // The user's message is recorded before the round-trip so the
    // transcript shows what was asked even if the answer fails.
    let user_entry = TranscriptEntry::user(query.clone());
    state.append_entry(user_entry.clone());
    view.entry_appended(&user_entry);
    state.set_pending_input(String::new());

    let outcome = match exchange(backend, &file, &query).await {
        Ok(answer) => {
            let entry = TranscriptEntry::assistant(answer);
            state.append_entry(entry.clone());
            view.entry_appended(&entry);
            SubmitOutcome::Answered
        }
        // No rollback: the user entry stays in the transcript.
        Err(err) => SubmitOutcome::Failed(err),
    };

    state.set_busy(false);
    view.busy_changed(false);

    outcome
}

async fn exchange<B: Backend>(backend: &B, file: &DocumentFile, query: &str) -> Result<String> {
    let context = backend.upload(file).await?;
    backend.answer(query, &context).await
}
