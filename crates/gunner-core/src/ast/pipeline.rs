//! Pipeline definitions
//!
//! A Pipeline is the typed view of a gunner document:
//! - A pipeline name
//! - Named environments (environment name to runner image)
//! - Named jobs, each with a runner, a stage, dependencies and ordered steps
//!
//! Projection never fails, so every field has an empty default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A CI pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Pipeline name (empty when absent)
    #[serde(default)]
    pub name: String,

    /// Environment name to image/runner description
    #[serde(default)]
    pub environments: BTreeMap<String, String>,

    /// Jobs keyed by job name
    #[serde(default)]
    pub jobs: BTreeMap<String, Job>,
}

/// A job within a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Environment the job runs on
    #[serde(rename = "runs-on", default)]
    pub runs_on: String,

    /// Stage the job belongs to
    #[serde(default)]
    pub stage: String,

    /// Names of jobs that must finish first
    #[serde(default)]
    pub needs: Vec<String>,

    /// Steps, in execution order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single step of a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub name: String,

    /// Shell command to run
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub run: String,

    /// Reusable action reference
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uses: String,

    /// Inputs passed to the action
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub with: BTreeMap<String, String>,

    /// Environment variables for the step
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Pipeline {
    /// Create an empty pipeline with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get a job by name
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.get(name)
    }
}
