//! # gs-core
//!
//! Core types, prompt catalog, and error types for GenScript.
//!
//! This crate provides the foundational types shared across all GenScript crates:
//! - The `Idea` entity and its AI-produced `IdeaDraft` counterpart
//! - The closed set of generation modes and idea fields
//! - The prompt catalog mapping each mode to its template and expected fields
//! - Cross-cutting error types
//! - JSON response envelopes returned by the HTTP API

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
