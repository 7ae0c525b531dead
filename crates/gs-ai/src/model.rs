//! The generative-model capability the gateway depends on.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AiError;

/// A model that turns a prompt into a JSON document shaped by `schema`.
///
/// Implementations return the raw response text; they do not validate it
/// against the schema. Parsing (and degrading on malformed output) belongs to
/// [`IdeaGateway`](crate::IdeaGateway).
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Issue exactly one generation request.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AiError>;
}
