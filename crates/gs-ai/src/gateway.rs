//! Idea generation: resolve mode, render prompt, call the model, parse drafts.

use std::sync::Arc;

use gs_core::catalog::{self, DEFAULT_IDEA_COUNT};
use gs_core::entities::IdeaDraft;
use gs_core::errors::CoreError;
use serde::Deserialize;
use serde_json::Value;

use crate::error::GatewayError;
use crate::model::GenerativeModel;
use crate::schema::{IDEAS_KEY, idea_response_schema};

/// Turns free-text input into idea drafts through a [`GenerativeModel`].
#[derive(Clone)]
pub struct IdeaGateway {
    model: Arc<dyn GenerativeModel>,
    idea_count: u32,
}

impl IdeaGateway {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            idea_count: DEFAULT_IDEA_COUNT,
        }
    }

    /// Number of ideas each prompt asks for.
    #[must_use]
    pub fn with_idea_count(mut self, idea_count: u32) -> Self {
        self.idea_count = idea_count;
        self
    }

    /// Generate drafts for `input` using the template registered for `mode`.
    ///
    /// Makes exactly one model call. A response that is not valid JSON or has
    /// no `ideas` array yields `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Core`] for blank input or an unknown mode (both
    /// before any model call) and [`GatewayError::Model`] if the model call
    /// fails.
    pub async fn generate(&self, input: &str, mode: &str) -> Result<Vec<IdeaDraft>, GatewayError> {
        if input.trim().is_empty() {
            return Err(CoreError::Validation("inputText must not be empty".to_string()).into());
        }
        let entry = catalog::resolve(mode)?;
        let prompt = entry.prompt_with_count(input, self.idea_count);
        tracing::debug!(mode = %entry.mode, prompt_len = prompt.len(), "requesting ideas");

        let text = self.model.generate(&prompt, idea_response_schema()).await?;
        let drafts = parse_drafts(&text);
        tracing::debug!(mode = %entry.mode, drafts = drafts.len(), "parsed model response");
        Ok(drafts)
    }
}

/// Parse a model response into drafts, degrading to an empty list.
///
/// - invalid JSON, or no `ideas` array at the top level: empty list
/// - an element missing a required string field, or with one blank: skipped
/// - blank optional fields: `None`
#[must_use]
pub fn parse_drafts(text: &str) -> Vec<IdeaDraft> {
    let document: Value = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(%error, "model response is not valid JSON; returning no ideas");
            return Vec::new();
        }
    };

    let Some(items) = document.get(IDEAS_KEY).and_then(Value::as_array) else {
        tracing::warn!("model response has no `{IDEAS_KEY}` array; returning no ideas");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match IdeaDraft::deserialize(item) {
            Ok(draft) => match draft.blank_required_field() {
                Some(field) => {
                    tracing::warn!(index, %field, "skipping idea with blank required field");
                    None
                }
                None => Some(draft.normalized()),
            },
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed idea in model response");
                None
            }
        })
        .collect()
}
