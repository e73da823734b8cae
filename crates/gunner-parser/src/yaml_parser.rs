//! YAML Parser
//!
//! Entry points for turning document text into a tree or a generic value,
//! and lookup helpers over flattened values.

use crate::error::Result;
use crate::flatten::flatten;
use crate::lexer::Tokenizer;
use crate::tree_builder::TreeBuilder;
use crate::validation::Validator;
use gunner_core::ast::Node;
use gunner_core::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// How structural anomalies are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Absorb anomalies and return a best-effort tree
    #[default]
    Lenient,
    /// Report anomalies as `MalformedStructure` errors
    Strict,
}

/// Parser options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    #[serde(default)]
    pub mode: ParseMode,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }
}

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse a document into a tree (lenient mode, never fails)
    pub fn parse(input: &str) -> Result<Node> {
        Self::parse_with_options(input, &ParseOptions::default())
    }

    /// Parse a document into a tree with explicit options
    pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Node> {
        let mut tokenizer = Tokenizer::new(input);
        let tokens = tokenizer.tokenize();

        if options.mode == ParseMode::Strict {
            Validator::validate(&tokens, tokenizer.diagnostics())?;
        } else {
            for diagnostic in tokenizer.diagnostics() {
                log::debug!(
                    "line {}, column {}: {:?} absorbed",
                    diagnostic.line,
                    diagnostic.column,
                    diagnostic.kind
                );
            }
        }

        let mut builder = TreeBuilder::new(&tokens);
        let tree = builder.build();

        match options.mode {
            ParseMode::Strict => Validator::check_fully_consumed(builder.remaining())?,
            ParseMode::Lenient => {
                if let Some(token) = builder.remaining() {
                    log::debug!(
                        "line {}, column {}: content from here on was not parsed",
                        token.line,
                        token.column
                    );
                }
            }
        }

        Ok(tree)
    }

    /// Parse a document straight into a generic value
    pub fn parse_value(input: &str) -> Result<Value> {
        Self::parse_value_with_options(input, &ParseOptions::default())
    }

    pub fn parse_value_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
        Self::parse_with_options(input, options).map(|tree| flatten(&tree))
    }

    /// Read and parse a document file
    pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Node> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("parsing {} ({} bytes)", path.as_ref().display(), content.len());
        Self::parse_with_options(&content, options)
    }

    /// Get an optional string field from a map value
    pub fn get_optional_string(obj: &Value, field: &str) -> Option<String> {
        obj.get(field).and_then(Value::as_str).map(|s| s.to_string())
    }

    /// Get a string field, empty when absent or not a string
    pub fn get_string_or_default(obj: &Value, field: &str) -> String {
        Self::get_optional_string(obj, field).unwrap_or_default()
    }

    /// Get an optional list field from a map value
    pub fn get_optional_list<'a>(obj: &'a Value, field: &str) -> Option<&'a [Value]> {
        obj.get(field).and_then(Value::as_list)
    }

    /// Get an optional map field from a map value
    pub fn get_optional_map<'a>(obj: &'a Value, field: &str) -> Option<&'a Value> {
        obj.get(field).filter(|v| v.as_map().is_some())
    }

    /// Collect the string entries of a map field, dropping anything else
    pub fn string_map(obj: &Value, field: &str) -> BTreeMap<String, String> {
        obj.get(field)
            .and_then(Value::as_map)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Collect the string items of a list field, dropping anything else
    pub fn string_list(obj: &Value, field: &str) -> Vec<String> {
        Self::get_optional_list(obj, field)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check fields of a map value against a list of known fields
    ///
    /// Returns one warning per unknown field, with a suggestion when a
    /// known field is close.
    pub fn unknown_fields(obj: &Value, known_fields: &[&str], context: &str) -> Vec<String> {
        let Some(map) = obj.as_map() else {
            return Vec::new();
        };

        let mut unknown: Vec<&str> = map
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !known_fields.contains(k))
            .collect();
        // Map order is unspecified; sort for stable output
        unknown.sort_unstable();

        unknown
            .into_iter()
            .map(|field| {
                let suggestion = match Self::find_similar_field(field, known_fields) {
                    Some(similar) => format!(" Did you mean '{}'?", similar),
                    None => String::new(),
                };
                format!("Unknown field '{}' in {}.{}", field, context, suggestion)
            })
            .collect()
    }

    /// Find similar field names using Levenshtein distance
    fn find_similar_field(field: &str, known_fields: &[&str]) -> Option<String> {
        known_fields
            .iter()
            .filter(|known| levenshtein_distance(field, known) <= 2)
            .min_by_key(|known| levenshtein_distance(field, known))
            .map(|s| s.to_string())
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    let mut previous: Vec<usize> = (0..=s2.len()).collect();
    let mut current = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = (previous[j + 1] + 1) // deletion
                .min(current[j] + 1) // insertion
                .min(previous[j] + cost); // substitution
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2.len()]
}
