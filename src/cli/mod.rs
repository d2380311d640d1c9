pub mod commands;
pub mod plan;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fursbliss-growth")]
#[command(
    author,
    version,
    about = "Review-first weekly content planner and posting-queue renderer"
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
    /// Generate weekly hooks, ad variants and the posting queue
    Plan(PlanArgs),

    /// Render a posting queue into copy/paste command blocks
    Commands(CommandsArgs),

    /// Print JSON Schema for config validation
    Schema(SchemaArgs),
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Path to config file [default: fursbliss.yaml, used only if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL used for CTA destinations [default: https://www.fursbliss.com]
    #[arg(long, env = "FURSBLISS_BRAND_URL")]
    pub brand_url: Option<String>,

    /// Directory where JSON output files are written [default: fursbliss_growth]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Week start date in YYYY-MM-DD [default: today]
    #[arg(long)]
    pub start_date: Option<String>,

    /// Print the posting schedule without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct CommandsArgs {
    /// Path to config file [default: fursbliss.yaml, used only if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to posting_queue.json [default: fursbliss_growth/posting_queue.json]
    #[arg(long)]
    pub queue: Option<PathBuf>,

    /// Output markdown file path [default: fursbliss_growth/openclaw_telegram_commands.md]
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}
