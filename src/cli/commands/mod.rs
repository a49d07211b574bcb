//! Subcommand implementations.

/// One-shot ask command handler (the default command).
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;
