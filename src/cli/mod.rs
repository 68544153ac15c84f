pub mod intent;
pub mod parse;
pub mod schema;

use clap::{Parser, Subcommand};
use planparse::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planparse")]
#[command(
    author,
    version,
    about = "Turn assistant replies into plan options and timelines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract plan options (name, pros, cons)
    Plans(ParseArgs),

    /// Extract a time-ordered timeline with routes
    Timeline(ParseArgs),

    /// Extract both, or only what a follow-up question asks for
    Parse(ReplyArgs),

    /// Classify a follow-up question (timeline, plans or chat)
    Intent(IntentArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// Reply text to parse (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "planparse.yaml", env = "PLANPARSE_CONFIG")]
    pub config: PathBuf,

    /// Override output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct ReplyArgs {
    #[command(flatten)]
    pub common: ParseArgs,

    /// The question the reply answers; selects which parser runs
    #[arg(short, long)]
    pub question: Option<String>,
}

#[derive(Parser, Clone)]
pub struct IntentArgs {
    /// The user's follow-up question
    pub question: String,
}
