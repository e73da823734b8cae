//! Gunner Core - shared types for the gunner pipeline parser
//!
//! This crate provides the data model used across the gunner crates:
//! - The parsed document tree (`Node`, `Mapping`)
//! - The flattened generic value handed to schema projection (`Value`)
//! - The typed CI pipeline (`Pipeline`, `Job`, `Step`)

pub mod ast;
pub mod types;

// Re-export commonly used types
pub use ast::{Job, Mapping, Node, Pipeline, Step};
pub use types::Value;
