use anyhow::{Context, Result, bail};
use std::io::Read;

use crate::backend::BackendClient;
use crate::config::{ConfigManager, resolve_endpoint};
use crate::document::DocumentFile;
use crate::session::{Rejection, SessionState, SubmitOutcome, submit};
use crate::ui::{Style, TerminalView};
use crate::warn;

pub struct AskOptions {
    pub file: Option<String>,
    pub question: Option<String>,
    pub endpoint: Option<String>,
}

/// Asks one question about a document and prints the answer to stdout.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let Some(file) = options.file else {
        bail!(
            "Error: Missing document\n\n\
             Usage:\n  \
             dq <FILE> [QUESTION]\n  \
             dq chat [FILE]"
        );
    };

    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let endpoint = resolve_endpoint(options.endpoint.as_deref(), &config_file);

    let document = DocumentFile::open(&file)?;
    if !document.has_supported_extension() {
        warn!(
            "{} '{}' is not a PDF, DOCX, or TXT file; the backend may reject it.",
            Style::warning("Warning:"),
            document.file_name()
        );
    }

    let question = match options.question {
        Some(question) => question,
        None => read_question_from_stdin()?,
    };

    let mut state = SessionState::new();
    state.select_file(document);
    state.set_pending_input(question);

    let client = BackendClient::new(endpoint);
    let mut view = TerminalView::new();

    match submit(&mut state, &client, &mut view).await {
        SubmitOutcome::Answered => Ok(()),
        SubmitOutcome::Rejected(Rejection::EmptyQuery) => bail!("Error: Question is empty"),
        // Unreachable: the file was selected above.
        SubmitOutcome::Rejected(Rejection::MissingFile) => bail!("Error: No document selected"),
        SubmitOutcome::Failed(err) => Err(err),
    }
}

fn read_question_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read question from stdin")?;
    Ok(buffer)
}
