//! Tree definitions for gunner documents
//!
//! This module contains:
//! - The generic document tree produced by the tree builder
//! - The typed pipeline the tree is projected into

pub mod node;
pub mod pipeline;

pub use node::{Mapping, Node};
pub use pipeline::{Job, Pipeline, Step};
