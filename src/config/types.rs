use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub placeholders: Placeholders,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Strings substituted when a plan reply lacks the expected structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Placeholders {
    /// Single pros entry when none were recognized
    #[serde(default = "default_no_pros")]
    pub no_pros: String,

    /// Single cons entry when none were recognized
    #[serde(default = "default_no_cons")]
    pub no_cons: String,

    /// Name of the synthetic plan returned when nothing could be parsed
    #[serde(default = "default_plan_name")]
    pub default_plan_name: String,

    #[serde(default = "default_plan_pros")]
    pub default_plan_pros: String,

    #[serde(default = "default_plan_cons")]
    pub default_plan_cons: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            no_pros: default_no_pros(),
            no_cons: default_no_cons(),
            default_plan_name: default_plan_name(),
            default_plan_pros: default_plan_pros(),
            default_plan_cons: default_plan_cons(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
