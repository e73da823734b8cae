//! Pipeline projection module
//!
//! Projects flattened documents into typed `Pipeline` values.

mod fields;
mod job_parser;
mod parser;

// Re-export public types
pub use parser::PipelineParser;
