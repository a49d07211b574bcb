//! Document file loading and validation.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// File extensions the backend knows how to extract text from.
///
/// Advisory only: other extensions are accepted with a warning, since
/// the backend makes the final call.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// A document selected for the current session.
///
/// Holds the file name and raw bytes; the content is uploaded as-is on
/// every submission, text extraction happens on the backend.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl DocumentFile {
    /// Reads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be accessed, cannot be read,
    /// or exceeds the maximum document size.
    pub fn open(path: &str) -> Result<Self> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_DOCUMENT_SIZE {
            bail!(
                "Error: Document size ({:.1} MB) exceeds maximum allowed size (10 MB).",
                size as f64 / 1024.0 / 1024.0
            );
        }

        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {path}"))?;

        let file_name = Path::new(path)
            .file_name()
            .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self { file_name, bytes })
    }

    /// Creates a document from in-memory content.
    pub const fn from_bytes(file_name: String, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// The file name (without directory components).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The raw document content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The document size in bytes.
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the file extension is one the backend supports.
    pub fn has_supported_extension(&self) -> bool {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            })
    }
}
