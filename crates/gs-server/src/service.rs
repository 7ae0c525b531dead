//! Request-independent idea operations shared by every HTTP handler.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use gs_ai::{AiError, GatewayError, IdeaGateway};
use gs_core::entities::Idea;
use gs_core::errors::CoreError;
use gs_db::IdeaStore;
use gs_db::error::DatabaseError;
use thiserror::Error;
use uuid::Uuid;

/// Default cap on `list` results.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Errors surfaced by [`IdeaService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Idea not found")]
    NotFound,

    #[error("Error generating ideas: {0}")]
    Model(AiError),

    #[error("Database error: {0}")]
    Store(#[from] DatabaseError),
}

impl From<GatewayError> for ServiceError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Core(CoreError::InvalidMode { mode }) => Self::InvalidMode(mode),
            GatewayError::Core(CoreError::Validation(message)) => Self::Validation(message),
            GatewayError::Model(error) => Self::Model(error),
        }
    }
}

/// Generates, persists, lists, and deletes ideas.
pub struct IdeaService {
    gateway: IdeaGateway,
    store: Arc<dyn IdeaStore>,
    list_limit: u32,
}

impl IdeaService {
    #[must_use]
    pub fn new(gateway: IdeaGateway, store: Arc<dyn IdeaStore>) -> Self {
        Self {
            gateway,
            store,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    #[must_use]
    pub fn with_list_limit(mut self, list_limit: u32) -> Self {
        self.list_limit = list_limit;
        self
    }

    /// Generate ideas for `input_text` in `mode` and persist them as one batch.
    ///
    /// Every idea in the batch gets a fresh v4 UUID and the same `created_at`,
    /// truncated to microseconds so it reads back from the store unchanged.
    /// An empty model result returns `Ok(vec![])` without touching the store.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Validation`] if `input_text` is blank
    /// - [`ServiceError::InvalidMode`] if `mode` is not a catalog mode
    /// - [`ServiceError::Model`] if the model call fails
    /// - [`ServiceError::Store`] if the batch cannot be persisted
    pub async fn generate(&self, input_text: &str, mode: &str) -> Result<Vec<Idea>, ServiceError> {
        let drafts = self.gateway.generate(input_text, mode).await?;
        if drafts.is_empty() {
            tracing::info!(%mode, "model produced no ideas");
            return Ok(Vec::new());
        }

        let created_at = Utc::now().trunc_subsecs(6);
        let ideas: Vec<Idea> = drafts
            .into_iter()
            .map(|draft| Idea::from_draft(Uuid::new_v4().to_string(), draft, created_at))
            .collect();

        self.store.insert_many(&ideas).await?;
        tracing::info!(%mode, count = ideas.len(), "generated ideas");
        Ok(ideas)
    }

    /// Stored ideas, newest first, capped at the configured list limit.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Idea>, ServiceError> {
        Ok(self.store.find_all(self.list_limit).await?)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no idea has `id`.
    pub async fn get(&self, id: &str) -> Result<Idea, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no idea has `id`.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.store.delete_by_id(id).await? {
            tracing::info!(%id, "deleted idea");
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
