//! JSON response envelopes returned by the GenScript HTTP API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::enums::{IdeaField, Mode};

/// Plain confirmation body, e.g. `{"message": "Idea deleted successfully"}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body, e.g. `{"detail": "Idea not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response item from `GET /api/modes`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModeInfo {
    pub mode: Mode,
    pub label: String,
    pub description: String,
    pub fields: Vec<IdeaField>,
}

impl From<&CatalogEntry> for ModeInfo {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            mode: entry.mode,
            label: entry.label.to_string(),
            description: entry.description.to_string(),
            fields: entry.fields.to_vec(),
        }
    }
}
