//! # gs-ai
//!
//! Generative model gateway for GenScript.
//!
//! - [`GenerativeModel`]: single-method capability (`prompt + schema -> JSON text`)
//! - [`GeminiClient`]: Gemini REST implementation with structured output
//! - [`IdeaGateway`]: mode resolution, prompt rendering, and degrade-to-empty
//!   parsing of the model's response into [`IdeaDraft`](gs_core::entities::IdeaDraft)s

mod error;
mod gateway;
mod gemini;
mod http;
mod model;
pub mod schema;

pub use error::{AiError, GatewayError};
pub use gateway::{IdeaGateway, parse_drafts};
pub use gemini::GeminiClient;
pub use model::GenerativeModel;
