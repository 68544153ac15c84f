use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::parse::Target;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("planparse=debug")
    } else {
        EnvFilter::new("planparse=warn")
    };

    // Logs go to stderr so stdout stays parseable
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plans(args) => cli::parse::execute(args, Target::Plans),
        Commands::Timeline(args) => cli::parse::execute(args, Target::Timeline),
        Commands::Parse(args) => cli::parse::execute_reply(args),
        Commands::Intent(args) => cli::intent::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
