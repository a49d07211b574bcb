//! Configuration file management and endpoint resolution.

mod manager;

pub use manager::{ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DqConfig, resolve_endpoint};
