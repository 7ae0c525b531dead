use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IdeaField;

/// An idea as produced by the generative model, before it is given an
/// identity and persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetization_strategies: Option<String>,
}

impl IdeaDraft {
    /// First required field (category, title, description) that is blank.
    #[must_use]
    pub fn blank_required_field(&self) -> Option<IdeaField> {
        [
            (IdeaField::Category, &self.category),
            (IdeaField::Title, &self.title),
            (IdeaField::Description, &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Collapse empty optional strings to `None`.
    ///
    /// The store reads empty TEXT columns back as `None`, so drafts are
    /// normalized up front to keep a stored idea identical to the one returned.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.trim().is_empty())
        }

        Self {
            refined_prompt: non_empty(self.refined_prompt),
            money_value: non_empty(self.money_value),
            effort_value: non_empty(self.effort_value),
            monetization_strategies: non_empty(self.monetization_strategies),
            ..self
        }
    }
}

/// A persisted idea. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetization_strategies: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Give a draft its identity and insertion timestamp.
    #[must_use]
    pub fn from_draft(id: String, draft: IdeaDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category: draft.category,
            title: draft.title,
            description: draft.description,
            refined_prompt: draft.refined_prompt,
            money_value: draft.money_value,
            effort_value: draft.effort_value,
            monetization_strategies: draft.monetization_strategies,
            created_at,
        }
    }
}
