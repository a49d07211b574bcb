//! # dq - Document Question-Answering CLI
//!
//! `dq` is a command-line chat client for a document question-answering
//! backend. Pick a PDF, DOCX, or TXT file, ask questions about it, and
//! keep a running transcript of the exchange.
//!
//! ## Features
//!
//! - **One-shot questions**: Ask a single question and print the answer
//! - **Interactive mode**: Chat-style sessions with `dq chat`
//! - **Document switching**: Swap the active document mid-session with `/file`
//! - **Transcript export**: Save the conversation to a text file with `/save`
//!
//! ## Quick Start
//!
//! ```bash
//! # Ask one question about a document
//! dq ./report.pdf "What is the total revenue?"
//!
//! # Question from stdin
//! echo "Who is the author?" | dq ./notes.txt
//!
//! # Interactive chat mode
//! dq chat ./report.pdf
//! ```
//!
//! ## Configuration
//!
//! The backend endpoint is stored in `~/.config/dq/config.toml`:
//!
//! ```toml
//! [dq]
//! endpoint = "http://localhost:5000"
//! ```

/// Backend client for the document ingestion and answer endpoints.
pub mod backend;

/// Interactive chat mode for question-answering sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and endpoint resolution.
pub mod config;

/// Document file loading and validation.
pub mod document;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Session state and the submission pipeline.
pub mod session;

/// Terminal UI components (spinner, colors, session view).
pub mod ui;
