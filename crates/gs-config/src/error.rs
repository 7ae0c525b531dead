//! Errors raised while loading GenScript settings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer could not be merged or the result did not fit `GenScriptConfig`.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The file passed with `--config` does not exist.
    #[error("Config file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A setting is out of range, e.g. `server.port = 0`.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
