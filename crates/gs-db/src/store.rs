//! Idea persistence: the [`IdeaStore`] capability and its libSQL implementation.

use async_trait::async_trait;
use gs_core::entities::Idea;

use crate::IdeaDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime};

const IDEA_COLUMNS: &str = "id, category, title, description, refined_prompt, money_value, \
                            effort_value, monetization_strategies, created_at";

/// Persistent collection of ideas keyed by id.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Insert every idea in one batch. Empty input is a no-op.
    async fn insert_many(&self, ideas: &[Idea]) -> Result<(), DatabaseError>;

    /// Up to `limit` ideas, newest first.
    async fn find_all(&self, limit: u32) -> Result<Vec<Idea>, DatabaseError>;

    /// The idea with `id`, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Idea>, DatabaseError>;

    /// Remove the idea with `id`. Returns whether exactly one idea was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, DatabaseError>;
}

fn row_to_idea(row: &libsql::Row) -> Result<Idea, DatabaseError> {
    Ok(Idea {
        id: row.get::<String>(0)?,
        category: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: row.get::<String>(3)?,
        refined_prompt: get_opt_string(row, 4)?,
        money_value: get_opt_string(row, 5)?,
        effort_value: get_opt_string(row, 6)?,
        monetization_strategies: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

#[async_trait]
impl IdeaStore for IdeaDb {
    async fn insert_many(&self, ideas: &[Idea]) -> Result<(), DatabaseError> {
        if ideas.is_empty() {
            return Ok(());
        }

        let sql = format!(
            "INSERT INTO ideas ({IDEA_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
        );
        let conn = self.conn().await;
        let tx = conn.transaction().await?;
        for idea in ideas {
            let inserted = tx
                .execute(
                    &sql,
                    libsql::params![
                        idea.id.as_str(),
                        idea.category.as_str(),
                        idea.title.as_str(),
                        idea.description.as_str(),
                        idea.refined_prompt.as_deref(),
                        idea.money_value.as_deref(),
                        idea.effort_value.as_deref(),
                        idea.monetization_strategies.as_deref(),
                        format_datetime(&idea.created_at)
                    ],
                )
                .await;
            if let Err(error) = inserted {
                tx.rollback().await?;
                return Err(error.into());
            }
        }
        tx.commit().await?;

        tracing::debug!(count = ideas.len(), "inserted ideas");
        Ok(())
    }

    async fn find_all(&self, limit: u32) -> Result<Vec<Idea>, DatabaseError> {
        let sql = format!(
            "SELECT {IDEA_COLUMNS} FROM ideas ORDER BY created_at DESC, rowid ASC LIMIT ?1"
        );
        let conn = self.conn().await;
        let mut rows = conn.query(&sql, [i64::from(limit)]).await?;

        let mut ideas = Vec::new();
        while let Some(row) = rows.next().await? {
            ideas.push(row_to_idea(&row)?);
        }
        Ok(ideas)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Idea>, DatabaseError> {
        let sql = format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE id = ?1");
        let conn = self.conn().await;
        let mut rows = conn.query(&sql, [id]).await?;
        rows.next().await?.map(|row| row_to_idea(&row)).transpose()
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, DatabaseError> {
        let affected = self
            .conn()
            .await
            .execute("DELETE FROM ideas WHERE id = ?1", [id])
            .await?;
        Ok(affected == 1)
    }
}
