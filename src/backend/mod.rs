//! Backend client for the document ingestion and answer endpoints.
//!
//! The backend is an opaque collaborator reached through two HTTP
//! operations: `POST /upload` (multipart document, returns the
//! extracted text) and `POST /answer` (query plus extracted text,
//! returns the answer).

mod client;

pub use client::BackendClient;

use anyhow::Result;

use crate::document::DocumentFile;

/// The two operations the submission pipeline needs from the backend.
///
/// Implemented by [`BackendClient`] over HTTP; tests substitute stubs
/// to exercise the pipeline without a network.
#[allow(async_fn_in_trait)] // single-threaded callers, no Send bound wanted
pub trait Backend {
    /// Uploads the document and returns the extracted text (the context).
    async fn upload(&self, file: &DocumentFile) -> Result<String>;

    /// Asks a question against previously extracted context.
    async fn answer(&self, query: &str, context: &str) -> Result<String>;
}
