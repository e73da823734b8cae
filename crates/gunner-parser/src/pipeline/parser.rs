//! Core pipeline parser implementation
//!
//! Projects a flattened document into a `Pipeline`:
//! - `name`: string, empty when absent
//! - `environments`: map of string to string, non-string entries dropped
//! - `jobs`: map of job name to job map, non-map entries dropped
//!
//! Projection itself never fails; only reading and strict parsing can.

use super::fields::PIPELINE_FIELDS;
use super::job_parser::{parse_job, warn_unknown};
use crate::error::Result;
use crate::flatten::flatten;
use crate::yaml_parser::{ParseOptions, YamlParser};
use gunner_core::ast::{Node, Pipeline};
use gunner_core::types::Value;
use std::path::Path;

/// Pipeline parser
pub struct PipelineParser;

impl PipelineParser {
    /// Parse a pipeline from document text (lenient mode)
    pub fn parse(input: &str) -> Result<Pipeline> {
        Self::parse_with_options(input, &ParseOptions::default())
    }

    /// Parse a pipeline from document text with explicit options
    pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Pipeline> {
        let tree = YamlParser::parse_with_options(input, options)?;
        Ok(Self::from_node(&tree))
    }

    /// Read and parse a pipeline file
    pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Pipeline> {
        let tree = YamlParser::parse_file(path, options)?;
        Ok(Self::from_node(&tree))
    }

    /// Project a document tree
    pub fn from_node(tree: &Node) -> Pipeline {
        Self::from_value(&flatten(tree))
    }

    /// Project a flattened document
    pub fn from_value(document: &Value) -> Pipeline {
        warn_unknown(document, PIPELINE_FIELDS, "pipeline");

        let jobs = document
            .get("jobs")
            .and_then(Value::as_map)
            .map(|jobs| {
                jobs.iter()
                    .filter_map(|(name, job_obj)| {
                        if job_obj.as_map().is_none() {
                            log::debug!("job '{}' is not a mapping, skipped", name);
                            return None;
                        }
                        Some((name.clone(), parse_job(name, job_obj)))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let pipeline = Pipeline {
            name: YamlParser::get_string_or_default(document, "name"),
            environments: YamlParser::string_map(document, "environments"),
            jobs,
        };

        log::debug!(
            "projected pipeline '{}' with {} environment(s) and {} job(s)",
            pipeline.name,
            pipeline.environments.len(),
            pipeline.jobs.len()
        );
        pipeline
    }
}
