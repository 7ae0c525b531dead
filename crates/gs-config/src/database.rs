//! Idea store (libSQL) configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_name() -> String {
    String::from("genscript")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL. Remote databases use `libsql://` or `http(s)://`;
    /// anything else is a local file path (`file:` prefix allowed).
    /// Empty means a local file named after [`DatabaseConfig::name`].
    #[serde(default)]
    pub url: String,

    /// Database name. Names the local file when `url` is empty.
    #[serde(default = "default_name")]
    pub name: String,

    /// Auth token for remote databases.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: default_name(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether `url` points at a remote libSQL server.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        ["libsql://", "http://", "https://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Local database path. Meaningless when [`is_remote`](Self::is_remote).
    #[must_use]
    pub fn local_path(&self) -> PathBuf {
        if self.url.is_empty() {
            return PathBuf::from(format!("{}.db", self.name));
        }
        PathBuf::from(self.url.strip_prefix("file:").unwrap_or(&self.url))
    }
}
