use anyhow::{Context, Result, bail};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::Backend;
use crate::document::DocumentFile;

#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    query: &'a str,
    context: &'a str,
}

// The backend signals failure either with a non-success status or with
// an HTTP 200 carrying an `error` field instead of the success field.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    text: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnswerResponse {
    answer: Option<String>,
    error: Option<String>,
}

/// HTTP client for the question-answering backend.
pub struct BackendClient {
    client: Client,
    endpoint: String,
}

impl BackendClient {
    /// Creates a client for the given backend base URL.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.trim_end_matches('/'))
    }
}

impl Backend for BackendClient {
    async fn upload(&self, file: &DocumentFile) -> Result<String> {
        let url = self.url("upload");

        let part = Part::bytes(file.bytes().to_vec()).file_name(file.file_name().to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Upload request failed with status {status}: {body}");
        }

        let body: UploadResponse = response
            .json()
            .await
            .context("Failed to parse upload response")?;

        extracted_text(body)
    }

    async fn answer(&self, query: &str, context: &str) -> Result<String> {
        let url = self.url("answer");

        let request = AnswerRequest { query, context };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Answer request failed with status {status}: {body}");
        }

        let body: AnswerResponse = response
            .json()
            .await
            .context("Failed to parse answer response")?;

        answer_text(body)
    }
}

fn extracted_text(response: UploadResponse) -> Result<String> {
    if let Some(error) = response.error {
        bail!("Backend rejected the document: {error}");
    }
    response
        .text
        .ok_or_else(|| anyhow::anyhow!("Upload response is missing the extracted text"))
}

fn answer_text(response: AnswerResponse) -> Result<String> {
    if let Some(error) = response.error {
        bail!("Backend could not answer: {error}");
    }
    response
        .answer
        .ok_or_else(|| anyhow::anyhow!("Answer response is missing the answer"))
}
