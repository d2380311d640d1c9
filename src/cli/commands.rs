//! CLI handler for the `commands` subcommand

use crate::cli::CommandsArgs;
use crate::config::Config;
use crate::output::write_document;
use crate::render::{build_document, load_queue};
use anyhow::Context;
use chrono::Utc;
use tracing::info;

pub fn execute(args: CommandsArgs) -> anyhow::Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let queue_path = args.queue.unwrap_or(config.commands.queue);
    let output_path = args.output.unwrap_or(config.commands.output);

    info!("Loading queue from {:?}", queue_path);
    let entries = load_queue(&queue_path)
        .with_context(|| format!("Failed to load queue {}", queue_path.display()))?;

    let document = build_document(&entries, &queue_path, Utc::now());
    write_document(&output_path, &document)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    info!("Rendered {} queue items", entries.len());

    println!("Wrote: {}", output_path.display());
    println!("Done.");

    Ok(())
}
