//! # gs-server
//!
//! HTTP surface of GenScript: an axum router over [`IdeaService`], which ties
//! the generative model gateway (`gs-ai`) to the idea store (`gs-db`).

pub mod api;
pub mod error;
pub mod service;

pub use api::{AppState, GenerateRequest, router};
pub use error::ApiError;
pub use service::{IdeaService, ServiceError};
