//! Gunner Parser - text to pipeline parser
//!
//! This crate converts indentation-structured text (a restricted YAML
//! subset) into a document tree, flattens the tree into a generic value,
//! and projects that value into a typed `Pipeline`.
//!
//! The stages run strictly in order:
//! `lexer` → `tree_builder` → `flatten` → `pipeline`.

pub mod error;
pub mod flatten;
pub mod lexer;
pub mod pipeline;
pub mod tree_builder;
pub mod validation;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{ErrorKind, ParseError, Result};
pub use flatten::flatten;
pub use lexer::{Token, TokenKind, Tokenizer};
pub use pipeline::PipelineParser;
pub use tree_builder::TreeBuilder;
pub use yaml_parser::{ParseMode, ParseOptions, YamlParser};
