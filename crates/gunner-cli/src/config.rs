//! CLI configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a parsed document is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pipeline summary
    #[default]
    Text,
    /// Pipeline as pretty-printed JSON
    Json,
    /// Pipeline as YAML
    Yaml,
    /// Generic document value as JSON, before pipeline projection
    Tree,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["text", "json", "yaml", "tree"];
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "tree" => Ok(Self::Tree),
            other => Err(anyhow::anyhow!(
                "Unknown output format '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Tree => "tree",
        };
        f.write_str(name)
    }
}

/// CLI configuration
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level for gunner crates, overridden by `RUST_LOG`
    pub log_level: String,

    /// Default output format
    pub format: OutputFormat,

    /// Parse in strict mode by default
    pub strict: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::default(),
            strict: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env`, `config/gunner.*` and `GUNNER_*` variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from("config/gunner")
    }

    /// Load configuration from an optional file plus the environment
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("GUNNER"))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
