use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::backend::BackendClient;
use crate::document::DocumentFile;
use crate::session::{Rejection, SessionState, SubmitOutcome, submit};
use crate::ui::{Style, TerminalView};
use crate::{fs, status, warn};

/// An interactive question-answering session.
///
/// Provides a REPL-style interface: plain lines are questions about the
/// current document, slash commands manage the session.
pub struct ChatSession {
    client: BackendClient,
    state: SessionState,
    view: TerminalView,
}

impl ChatSession {
    /// Creates a new chat session against the given backend endpoint.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: BackendClient::new(endpoint),
            state: SessionState::new(),
            view: TerminalView::new(),
        }
    }

    /// Makes the document the active one, clearing any prior transcript.
    ///
    /// Unsupported extensions warn but are still accepted; the backend
    /// makes the final call.
    pub fn select_document(&mut self, document: DocumentFile) {
        if !document.has_supported_extension() {
            warn!(
                "{} '{}' is not a PDF, DOCX, or TXT file; the backend may reject it.",
                Style::warning("Warning:"),
                document.file_name()
            );
        }
        let name = document.file_name().to_string();
        self.state.select_file(document);
        status!(
            "{} Selected {} (transcript cleared)",
            Style::success("✓"),
            Style::value(name)
        );
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        if self.state.selected_file().is_none() {
            println!(
                "{}",
                Style::hint("No document selected. Pick one with /file <path>.")
            );
            println!();
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(
                    "Ask about the current document, /help for commands, Ctrl+C to quit",
                )
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(question) => {
                        self.ask(question).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Runs one submission round and reports the outcome.
    async fn ask(&mut self, question: String) {
        self.state.set_pending_input(question);

        let outcome = submit(&mut self.state, &self.client, &mut self.view).await;

        match outcome {
            SubmitOutcome::Rejected(Rejection::MissingFile) => {
                ui::print_error("No document selected. Pick one with /file <path>.");
            }
            SubmitOutcome::Rejected(Rejection::EmptyQuery) => {
                ui::print_error("Type your question");
            }
            SubmitOutcome::Answered => {
                status!("{}", Style::success("✓ Message sent"));
            }
            SubmitOutcome::Failed(err) => {
                ui::print_error(&format!("Failed to send message: {err:#}"));
            }
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::File { path } => {
                self.handle_file(path.as_deref());
                true
            }
            SlashCommand::Clear => {
                self.state.clear();
                status!("{}", Style::success("✓ Chat cleared"));
                true
            }
            SlashCommand::Save { path } => {
                self.handle_save(path.as_deref());
                true
            }
            SlashCommand::Config => {
                ui::print_config(self.client.endpoint(), &self.state);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn handle_file(&mut self, path: Option<&str>) {
        let Some(path) = path else {
            println!("Usage: /file <path>");
            return;
        };

        match DocumentFile::open(path) {
            Ok(document) => self.select_document(document),
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    fn handle_save(&self, path: Option<&str>) {
        let Some(path) = path else {
            println!("Usage: /save <path>");
            return;
        };

        if self.state.transcript().is_empty() {
            ui::print_error("Nothing to save yet");
            return;
        }

        match fs::atomic_write(path, &ui::render_transcript(self.state.transcript())) {
            Ok(()) => {
                status!(
                    "{} Transcript saved to {}",
                    Style::success("✓"),
                    Style::value(path)
                );
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }
}
