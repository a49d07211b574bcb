//! Configure command handler for editing the backend endpoint.

use anyhow::{Result, bail};
use inquire::Text;

use crate::config::{ConfigManager, DEFAULT_ENDPOINT};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current configuration; otherwise prompts
/// for the backend endpoint and saves it.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_config();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .dq
            .endpoint
            .as_deref()
            .map_or_else(
                || Style::secondary(format!("{DEFAULT_ENDPOINT} (default)")),
                Style::value
            )
    );
    println!();
    println!(
        "{}",
        Style::secondary(format!("Config file: {}", manager.config_path().display()))
    );

    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    let current = config
        .dq
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let endpoint = Text::new("Backend endpoint:")
        .with_initial_value(&current)
        .with_help_message("Base URL of the question-answering backend")
        .prompt()?;

    let endpoint = endpoint.trim().trim_end_matches('/').to_string();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }

    config.dq.endpoint = Some(endpoint);
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}
