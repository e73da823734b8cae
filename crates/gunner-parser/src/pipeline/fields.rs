//! Known document fields
//!
//! Fields outside these lists are ignored by projection and reported as
//! warnings.

pub(super) const PIPELINE_FIELDS: &[&str] = &["name", "environments", "jobs"];
pub(super) const JOB_FIELDS: &[&str] = &["runs-on", "stage", "needs", "steps"];
pub(super) const STEP_FIELDS: &[&str] = &["name", "run", "uses", "with", "env"];
