#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gs_ai::{AiError, GenerativeModel, IdeaGateway};
use gs_core::entities::Idea;
use gs_db::error::DatabaseError;
use gs_db::{IdeaDb, IdeaStore};
use gs_server::IdeaService;
use serde_json::Value;

pub const AGRI_RESPONSE: &str = r#"{"ideas": [{"category": "AgriTech", "title": "Vertical Farming ROI", "description": "..."}]}"#;

/// Replies with a fixed body, or fails when built with [`StubModel::failing`].
pub struct StubModel {
    body: Option<String>,
    pub calls: AtomicUsize,
}

impl StubModel {
    pub fn replying(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Some(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            body: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body.clone().ok_or(AiError::Api {
            status: 503,
            message: "model overloaded".into(),
        })
    }
}

/// In-memory libSQL store that counts `insert_many` calls.
pub struct CountingStore {
    inner: IdeaDb,
    pub inserts: AtomicUsize,
}

impl CountingStore {
    pub async fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: IdeaDb::open_local(":memory:").await.unwrap(),
            inserts: AtomicUsize::new(0),
        })
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdeaStore for CountingStore {
    async fn insert_many(&self, ideas: &[Idea]) -> Result<(), DatabaseError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert_many(ideas).await
    }

    async fn find_all(&self, limit: u32) -> Result<Vec<Idea>, DatabaseError> {
        self.inner.find_all(limit).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Idea>, DatabaseError> {
        self.inner.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, DatabaseError> {
        self.inner.delete_by_id(id).await
    }
}

pub fn service(model: Arc<StubModel>, store: Arc<CountingStore>) -> IdeaService {
    IdeaService::new(IdeaGateway::new(model), store)
}
