//! # gs-db
//!
//! libSQL-backed idea store for GenScript.
//!
//! Ideas live in a single `ideas` table. The same schema serves a local file
//! (default `<name>.db`), an in-memory database for tests, and a remote
//! libSQL server when the configured URL is `libsql://` or `http(s)://`.

pub mod error;
pub mod helpers;
mod migrations;
mod store;

use std::path::Path;

use error::DatabaseError;
use gs_config::DatabaseConfig;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

pub use store::IdeaStore;

/// Database handle holding the idea table.
///
/// Requests share one connection. It is locked for the whole of each store
/// operation, so a batch transaction never interleaves with another request.
pub struct IdeaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: Mutex<libsql::Connection>,
}

impl IdeaDb {
    /// Open the store described by `config`, local or remote.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the database cannot be reached,
    /// or `DatabaseError::Migration` if the schema cannot be applied.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(config.local_path()).await
        }
    }

    /// Open a local database file, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("{}: {e}", path.display())))?;
        let conn = Mutex::new(db.connect()?);

        let idea_db = Self { db, conn };
        idea_db.run_migrations().await?;
        tracing::debug!(path = %path.display(), "opened local idea store");
        Ok(idea_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the server cannot be reached.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("{url}: {e}")))?;
        let conn = Mutex::new(
            db.connect()
                .map_err(|e| DatabaseError::Unavailable(format!("{url}: {e}")))?,
        );

        let idea_db = Self { db, conn };
        idea_db.run_migrations().await?;
        tracing::debug!(%url, "opened remote idea store");
        Ok(idea_db)
    }

    /// Lock the underlying libSQL connection for direct queries.
    pub async fn conn(&self) -> MutexGuard<'_, libsql::Connection> {
        self.conn.lock().await
    }
}
