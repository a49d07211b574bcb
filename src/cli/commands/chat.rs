use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, resolve_endpoint};
use crate::document::DocumentFile;

pub struct ChatOptions {
    pub file: Option<String>,
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let endpoint = resolve_endpoint(options.endpoint.as_deref(), &config_file);

    let mut session = ChatSession::new(endpoint);

    if let Some(path) = options.file.as_deref() {
        session.select_document(DocumentFile::open(path)?);
    }

    session.run().await
}
