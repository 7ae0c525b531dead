//! # gs-config
//!
//! Layered configuration loading for GenScript using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GENSCRIPT_*` prefix, `__` as separator)
//! 2. Unprefixed deployment variables (`DATABASE_URL`, `DATABASE_NAME`,
//!    `DATABASE_AUTH_TOKEN`, `GEMINI_API_KEY`, `GEMINI_MODEL`)
//! 3. An explicit config file passed by the caller (e.g. `--config`)
//! 4. Project-level `./genscript.toml`
//! 5. User-level `~/.config/genscript/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GENSCRIPT_GEMINI__API_KEY` -> `gemini.api_key`,
//! `GENSCRIPT_SERVER__PORT` -> `server.port`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gs_config::GenScriptConfig;
//!
//! let config = GenScriptConfig::load_with_dotenv(None).expect("config");
//!
//! if !config.gemini.is_configured() {
//!     eprintln!("GEMINI_API_KEY is not set");
//! }
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod database;
mod error;
mod gemini;
mod generation;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use generation::GenerationConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unprefixed variables accepted for deployment compatibility, with the
/// config key each one fills.
const LEGACY_ENV: [(&str, &str); 5] = [
    ("DATABASE_URL", "database.url"),
    ("DATABASE_NAME", "database.name"),
    ("DATABASE_AUTH_TOKEN", "database.auth_token"),
    ("GEMINI_API_KEY", "gemini.api_key"),
    ("GEMINI_MODEL", "gemini.model"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenScriptConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl GenScriptConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `extra` above the project-local file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `extra` does not exist, or
    /// another [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let config: Self = Self::figment_with(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support, layering `extra` above
    /// the project-local file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain with an optional explicit TOML file.
    #[must_use]
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from("genscript.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed("GENSCRIPT_").split("__"))
    }

    /// Reject values that would make the service unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.server.port == 0 {
            return Err(invalid("server.port", "must be non-zero"));
        }
        if self.generation.idea_count == 0 {
            return Err(invalid("generation.idea_count", "must be at least 1"));
        }
        if self.generation.list_limit == 0 {
            return Err(invalid("generation.list_limit", "must be at least 1"));
        }
        if self.database.url.is_empty() && self.database.name.trim().is_empty() {
            return Err(invalid(
                "database.name",
                "must be set when database.url is empty",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("genscript").join("config.toml"))
    }

    /// Env provider for the unprefixed variables in [`LEGACY_ENV`].
    fn legacy_env() -> Env {
        Env::raw().filter_map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                .map(|(_, path)| (*path).into())
        })
    }
}
