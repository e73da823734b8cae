//! Output rendering

use crate::config::OutputFormat;
use anyhow::Result;
use gunner_core::ast::{Node, Pipeline};
use gunner_parser::{flatten, PipelineParser};
use std::fmt::Write;

/// Render a parsed document in the requested format
pub fn render(tree: &Node, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Tree => {
            // serde_json maps are sorted, which keeps this output stable
            let value = serde_json::to_value(flatten(tree))?;
            serde_json::to_string_pretty(&value)? + "\n"
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&PipelineParser::from_node(tree))? + "\n"
        }
        OutputFormat::Yaml => serde_yaml::to_string(&PipelineParser::from_node(tree))?,
        OutputFormat::Text => summary(&PipelineParser::from_node(tree))?,
    };
    Ok(output)
}

/// Human-readable pipeline summary
pub fn summary(pipeline: &Pipeline) -> Result<String> {
    let mut out = String::new();
    write_summary(&mut out, pipeline)?;
    Ok(out)
}

fn write_summary(out: &mut String, pipeline: &Pipeline) -> std::fmt::Result {
    writeln!(out, "Name: {}", pipeline.name)?;

    writeln!(out, "\nEnvironments:")?;
    for (name, image) in &pipeline.environments {
        writeln!(out, "  {}: {}", name, image)?;
    }

    writeln!(out, "\nJobs:")?;
    for (name, job) in &pipeline.jobs {
        writeln!(out, "\n  {}:", name)?;
        writeln!(out, "    runs-on: {}", job.runs_on)?;
        writeln!(out, "    stage: {}", job.stage)?;
        if !job.needs.is_empty() {
            writeln!(out, "    needs: [{}]", job.needs.join(" "))?;
        }

        writeln!(out, "    steps:")?;
        for (i, step) in job.steps.iter().enumerate() {
            writeln!(out, "      {}. {}", i + 1, step.name)?;
            if !step.run.is_empty() {
                writeln!(out, "         run: {}", step.run)?;
            }
            if !step.uses.is_empty() {
                writeln!(out, "         uses: {}", step.uses)?;
            }
            for (label, entries) in [("with", &step.with), ("env", &step.env)] {
                if entries.is_empty() {
                    continue;
                }
                writeln!(out, "         {}:", label)?;
                for (k, v) in entries {
                    writeln!(out, "           {}: {}", k, v)?;
                }
            }
        }
    }

    Ok(())
}
