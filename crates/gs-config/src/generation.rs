//! Idea generation and retrieval limits.

use serde::{Deserialize, Serialize};

/// Ideas requested per prompt.
const fn default_idea_count() -> u32 {
    50
}

/// Maximum ideas returned by the list endpoint.
const fn default_list_limit() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Number of ideas the prompt asks the model for.
    #[serde(default = "default_idea_count")]
    pub idea_count: u32,

    /// Fixed cap on `GET /api/ideas`.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            idea_count: default_idea_count(),
            list_limit: default_list_limit(),
        }
    }
}
