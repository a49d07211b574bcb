use crate::document::DocumentFile;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the transcript.
///
/// Immutable once created; the transcript is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    text: String,
    speaker: Speaker,
}

impl TranscriptEntry {
    /// Creates a user entry.
    pub const fn user(text: String) -> Self {
        Self {
            text,
            speaker: Speaker::User,
        }
    }

    /// Creates an assistant entry.
    pub const fn assistant(text: String) -> Self {
        Self {
            text,
            speaker: Speaker::Assistant,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn speaker(&self) -> Speaker {
        self.speaker
    }
}

/// State for one chat session.
///
/// The transcript is scoped to a single document: selecting a new file
/// clears it. All mutation goes through the four mutators below; the
/// submission pipeline is the only caller that flips `busy`.
#[derive(Debug, Default)]
pub struct SessionState {
    transcript: Vec<TranscriptEntry>,
    pending_input: String,
    selected_file: Option<DocumentFile>,
    busy: bool,
}

impl SessionState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub const fn selected_file(&self) -> Option<&DocumentFile> {
        self.selected_file.as_ref()
    }

    pub const fn busy(&self) -> bool {
        self.busy
    }

    /// Replaces the selected file and empties the transcript.
    ///
    /// A transcript is scoped to one document, so this always clears it,
    /// even when the same file is selected twice in a row.
    pub fn select_file(&mut self, file: DocumentFile) {
        self.selected_file = Some(file);
        self.transcript.clear();
    }

    /// Replaces the pending input verbatim (no trimming at this layer).
    pub fn set_pending_input(&mut self, text: String) {
        self.pending_input = text;
    }

    /// Appends an entry to the transcript.
    pub fn append_entry(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    /// Resets transcript, pending input, and selected file.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.pending_input.clear();
        self.selected_file = None;
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> DocumentFile {
        DocumentFile::from_bytes(name.to_string(), b"content".to_vec())
    }

    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::new();
        assert!(state.transcript().is_empty());
        assert_eq!(state.pending_input(), "");
        assert!(state.selected_file().is_none());
        assert!(!state.busy());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut state = SessionState::new();
        state.append_entry(TranscriptEntry::user("What is X?".to_string()));
        state.append_entry(TranscriptEntry::assistant("Y".to_string()));

        let transcript = state.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].speaker(), Speaker::User);
        assert_eq!(transcript[0].text(), "What is X?");
        assert_eq!(transcript[1].speaker(), Speaker::Assistant);
        assert_eq!(transcript[1].text(), "Y");
    }

    #[test]
    fn test_select_file_empties_transcript() {
        let mut state = SessionState::new();
        state.append_entry(TranscriptEntry::user("old question".to_string()));

        state.select_file(doc("report.pdf"));

        assert!(state.transcript().is_empty());
        assert_eq!(
            state.selected_file().map(DocumentFile::file_name),
            Some("report.pdf")
        );
    }

    #[test]
    fn test_select_same_file_twice_still_empties_transcript() {
        let mut state = SessionState::new();
        state.select_file(doc("report.pdf"));
        state.append_entry(TranscriptEntry::user("question".to_string()));

        state.select_file(doc("report.pdf"));

        assert!(state.transcript().is_empty());
        assert!(state.selected_file().is_some());
    }

    #[test]
    fn test_set_pending_input_is_verbatim() {
        let mut state = SessionState::new();
        state.set_pending_input("  padded  ".to_string());
        assert_eq!(state.pending_input(), "  padded  ");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SessionState::new();
        state.select_file(doc("report.pdf"));
        state.set_pending_input("half-typed".to_string());
        state.append_entry(TranscriptEntry::user("question".to_string()));

        state.clear();

        assert!(state.transcript().is_empty());
        assert_eq!(state.pending_input(), "");
        assert!(state.selected_file().is_none());
    }

    #[test]
    fn test_clear_on_empty_session_is_noop() {
        let mut state = SessionState::new();
        state.clear();
        assert!(state.transcript().is_empty());
        assert_eq!(state.pending_input(), "");
        assert!(state.selected_file().is_none());
    }
}
