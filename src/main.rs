use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod output;
mod planner;
mod render;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("fursbliss_growth=debug")
    } else {
        EnvFilter::new("fursbliss_growth=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => cli::plan::execute(args),
        Commands::Commands(args) => cli::commands::execute(args),
        Commands::Schema(args) => cli::schema::execute(args),
    }
}
