//! Database migration runner.
//!
//! Migrations are embedded at compile time and executed on every open.
//! All statements use `IF NOT EXISTS`, so re-running is a no-op.

use crate::IdeaDb;
use crate::error::DatabaseError;

const MIGRATION_001: &str = include_str!("../migrations/001_ideas.sql");

impl IdeaDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn()
            .await
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_ideas: {e}")))?;
        Ok(())
    }
}
