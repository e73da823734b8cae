//! Job and step projection
//!
//! Every field is optional. A field of the wrong shape is treated as
//! absent.

use super::fields::{JOB_FIELDS, STEP_FIELDS};
use crate::yaml_parser::YamlParser;
use gunner_core::ast::{Job, Step};
use gunner_core::types::Value;

/// Project one job map
pub(super) fn parse_job(name: &str, job_obj: &Value) -> Job {
    warn_unknown(job_obj, JOB_FIELDS, &format!("job '{}'", name));

    let steps = YamlParser::get_optional_list(job_obj, "steps")
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| parse_step(name, index, item))
                .collect()
        })
        .unwrap_or_default();

    Job {
        runs_on: YamlParser::get_string_or_default(job_obj, "runs-on"),
        stage: YamlParser::get_string_or_default(job_obj, "stage"),
        needs: YamlParser::string_list(job_obj, "needs"),
        steps,
    }
}

/// Project one step; items that are not maps are skipped
pub(super) fn parse_step(job: &str, index: usize, step_obj: &Value) -> Option<Step> {
    if step_obj.as_map().is_none() {
        log::debug!("job '{}': step {} is not a mapping, skipped", job, index + 1);
        return None;
    }
    warn_unknown(step_obj, STEP_FIELDS, &format!("step {} of job '{}'", index + 1, job));

    Some(Step {
        name: YamlParser::get_string_or_default(step_obj, "name"),
        run: YamlParser::get_string_or_default(step_obj, "run"),
        uses: YamlParser::get_string_or_default(step_obj, "uses"),
        with: YamlParser::string_map(step_obj, "with"),
        env: YamlParser::string_map(step_obj, "env"),
    })
}

pub(super) fn warn_unknown(obj: &Value, known: &[&str], context: &str) {
    for warning in YamlParser::unknown_fields(obj, known, context) {
        log::warn!("{}", warning);
    }
}
