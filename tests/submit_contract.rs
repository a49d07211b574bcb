//! Submission pipeline contract tests.
//!
//! These verify the client-side interaction contract against a stub
//! backend: precondition rejections mutate nothing, successful rounds
//! append exactly user-then-assistant, failed rounds keep the user
//! entry, and busy is always released.

#![allow(clippy::unwrap_used)]

use anyhow::{Result, bail};
use dq_cli::backend::Backend;
use dq_cli::document::DocumentFile;
use dq_cli::session::{
    Rejection, SessionState, Speaker, SubmitOutcome, TranscriptEntry, submit,
};
use dq_cli::ui::SessionView;

enum StubBackend {
    /// Upload returns the given context, answer returns the given text.
    Working { context: String, answer: String },
    /// Upload fails with a transport-style error.
    UploadDown,
    /// Upload succeeds, answer fails.
    AnswerDown { context: String },
}

impl Backend for StubBackend {
    async fn upload(&self, _file: &DocumentFile) -> Result<String> {
        match self {
            Self::Working { context, .. } | Self::AnswerDown { context } => Ok(context.clone()),
            Self::UploadDown => bail!("connection refused"),
        }
    }

    async fn answer(&self, _query: &str, _context: &str) -> Result<String> {
        match self {
            Self::Working { answer, .. } => Ok(answer.clone()),
            Self::UploadDown => unreachable!("answer must not be called when upload fails"),
            Self::AnswerDown { .. } => bail!("model error"),
        }
    }
}

/// Records the busy transitions the pipeline reports.
#[derive(Default)]
struct NullView {
    busy_flips: u32,
}

impl SessionView for NullView {
    fn entry_appended(&mut self, _entry: &TranscriptEntry) {}

    fn busy_changed(&mut self, _busy: bool) {
        self.busy_flips += 1;
    }
}

fn session_with(file_name: &str, query: &str) -> SessionState {
    let mut state = SessionState::new();
    state.select_file(DocumentFile::from_bytes(
        file_name.to_string(),
        b"binary document content".to_vec(),
    ));
    state.set_pending_input(query.to_string());
    state
}

#[tokio::test]
async fn missing_file_rejects_without_mutation() {
    let mut state = SessionState::new();
    state.set_pending_input("hi".to_string());
    let mut view = NullView::default();

    let outcome = submit(
        &mut state,
        &StubBackend::Working {
            context: String::new(),
            answer: String::new(),
        },
        &mut view,
    )
    .await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(Rejection::MissingFile)
    ));
    assert!(state.transcript().is_empty());
    assert_eq!(state.pending_input(), "hi");
    assert_eq!(view.busy_flips, 0);
}

#[tokio::test]
async fn whitespace_query_rejects_without_mutation() {
    let mut state = session_with("doc.pdf", "   ");
    let mut view = NullView::default();

    let outcome = submit(
        &mut state,
        &StubBackend::Working {
            context: String::new(),
            answer: String::new(),
        },
        &mut view,
    )
    .await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(Rejection::EmptyQuery)
    ));
    assert!(state.transcript().is_empty());
    assert_eq!(state.pending_input(), "   ");
}

#[tokio::test]
async fn successful_submission_appends_user_then_assistant() {
    let mut state = session_with("doc.pdf", "What is X?");
    let mut view = NullView::default();

    let outcome = submit(
        &mut state,
        &StubBackend::Working {
            context: "X is Y".to_string(),
            answer: "Y".to_string(),
        },
        &mut view,
    )
    .await;

    assert!(matches!(outcome, SubmitOutcome::Answered));

    let transcript = state.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].speaker(), Speaker::User);
    assert_eq!(transcript[0].text(), "What is X?");
    assert_eq!(transcript[1].speaker(), Speaker::Assistant);
    assert_eq!(transcript[1].text(), "Y");

    assert_eq!(state.pending_input(), "");
    assert!(!state.busy());
    // Busy went up and came back down exactly once.
    assert_eq!(view.busy_flips, 2);
}

#[tokio::test]
async fn upload_failure_keeps_only_user_entry() {
    let mut state = session_with("doc.pdf", "What is X?");
    let mut view = NullView::default();

    let outcome = submit(&mut state, &StubBackend::UploadDown, &mut view).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.transcript()[0].speaker(), Speaker::User);
    assert_eq!(state.pending_input(), "");
    assert!(!state.busy());
    assert_eq!(view.busy_flips, 2);
}

#[tokio::test]
async fn answer_failure_keeps_only_user_entry() {
    let mut state = session_with("doc.pdf", "What is X?");
    let mut view = NullView::default();

    let outcome = submit(
        &mut state,
        &StubBackend::AnswerDown {
            context: "X is Y".to_string(),
        },
        &mut view,
    )
    .await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.transcript()[0].speaker(), Speaker::User);
    assert!(!state.busy());
}

#[tokio::test]
async fn pending_input_is_trimmed_into_the_transcript() {
    let mut state = session_with("doc.pdf", "  What is X?  ");
    let mut view = NullView::default();

    submit(
        &mut state,
        &StubBackend::Working {
            context: "X is Y".to_string(),
            answer: "Y".to_string(),
        },
        &mut view,
    )
    .await;

    assert_eq!(state.transcript()[0].text(), "What is X?");
}

#[tokio::test]
async fn failed_submission_leaves_session_continuable() {
    let mut state = session_with("doc.pdf", "first question");
    let mut view = NullView::default();

    submit(&mut state, &StubBackend::UploadDown, &mut view).await;

    // The backend recovers; the next submission works on the same state.
    state.set_pending_input("second question".to_string());
    let outcome = submit(
        &mut state,
        &StubBackend::Working {
            context: "context".to_string(),
            answer: "an answer".to_string(),
        },
        &mut view,
    )
    .await;

    assert!(matches!(outcome, SubmitOutcome::Answered));
    let transcript = state.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].text(), "first question");
    assert_eq!(transcript[1].text(), "second question");
    assert_eq!(transcript[2].text(), "an answer");
}

#[test]
fn clear_empties_the_whole_session() {
    let mut state = session_with("doc.pdf", "half-typed question");
    state.append_entry(TranscriptEntry::user("asked".to_string()));
    state.append_entry(TranscriptEntry::assistant("answered".to_string()));

    state.clear();

    assert!(state.transcript().is_empty());
    assert_eq!(state.pending_input(), "");
    assert!(state.selected_file().is_none());
}

#[test]
fn selecting_a_file_always_empties_the_transcript() {
    let mut state = session_with("doc.pdf", "");
    state.append_entry(TranscriptEntry::user("asked".to_string()));

    state.select_file(DocumentFile::from_bytes(
        "doc.pdf".to_string(),
        b"binary document content".to_vec(),
    ));

    assert!(state.transcript().is_empty());
}
