//! gunner command-line interface
//!
//! Parses a pipeline document and prints it in one of several formats.
//!
//! Usage:
//!   gunner `<path>` [--format text|json|yaml|tree] [--strict]
//!   gunner - < pipeline.yml                         - Read the document from stdin

mod config;
mod render;

use crate::config::{CliConfig, OutputFormat};
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use gunner_parser::{ParseMode, ParseOptions, YamlParser};
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let matches = command().get_matches();

    // Load configuration
    let config = CliConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    debug!("Loaded configuration: {:?}", config);

    let format = match matches.get_one::<String>("format") {
        Some(name) => name.parse()?,
        None => config.format,
    };
    let options = ParseOptions {
        mode: if matches.get_flag("strict") || config.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
    };

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let output = run(path, format, &options)?;
    print!("{}", output);

    Ok(())
}

fn command() -> Command {
    Command::new("gunner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and inspect CI pipeline documents")
        .arg(
            Arg::new("path")
                .help("Path to the pipeline document, or '-' for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: from config, else text)")
                .value_parser(OutputFormat::NAMES),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject malformed indentation and unparsed content")
                .action(ArgAction::SetTrue),
        )
}

/// Read, parse and render one document
fn run(path: &str, format: OutputFormat, options: &ParseOptions) -> Result<String> {
    let content = read_input(path)?;
    info!("Parsing {} in {:?} mode", display_name(path), options.mode);

    let tree = YamlParser::parse_with_options(&content, options)
        .with_context(|| format!("Failed to parse {}", display_name(path)))?;
    render::render(&tree, format)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn display_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

/// Initialize tracing subscriber
///
/// Library crates log through the `log` facade; those records are bridged
/// into the subscriber.
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("gunner={level},gunner_parser={level},gunner_core={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
