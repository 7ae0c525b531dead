//! Entity structs for GenScript domain objects.
//!
//! `Idea` maps to the `ideas` table in the libSQL store. Both structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation. JSON keys are camelCase to match the HTTP contract.

mod idea;

pub use idea::{Idea, IdeaDraft};
