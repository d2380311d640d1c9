//! CLI handler for the `plan` subcommand

use crate::cli::PlanArgs;
use crate::config::{normalize_brand_url, Config};
use crate::output::write_batch;
use crate::planner::{
    build_ad_variants, build_hooks, build_queue, parse_start_date, Batch, QueueItem,
};
use anyhow::Context;
use chrono::{Local, Utc};
use tracing::info;

const HOOKS_FILE: &str = "weekly_hooks.json";
const VARIANTS_FILE: &str = "ad_variants.json";
const QUEUE_FILE: &str = "posting_queue.json";

pub fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = Config::resolve(args.config.as_deref())?;

    // CLI flags win over the config file
    if let Some(brand_url) = args.brand_url {
        config.brand_url = brand_url;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    config.validate()?;

    let start = match args.start_date.as_deref() {
        Some(value) => parse_start_date(value)?,
        None => Local::now().date_naive(),
    };
    let brand_url = normalize_brand_url(&config.brand_url)?;
    let times = config.schedule.posting_times()?;

    // One instant shared by every envelope in this run
    let generated_at = Utc::now();
    info!("Planning week of {} for {}", start, brand_url);

    let hooks = build_hooks(&brand_url, start)?;
    let variants = build_ad_variants(&brand_url);
    let queue = build_queue(&hooks, &brand_url, start, &times)?;

    if args.dry_run {
        info!("DRY RUN - no files will be written");
        print_schedule(&queue);
        return Ok(());
    }

    let out_dir = &config.output_dir;
    let hooks_path = out_dir.join(HOOKS_FILE);
    let variants_path = out_dir.join(VARIANTS_FILE);
    let queue_path = out_dir.join(QUEUE_FILE);

    write_batch(&hooks_path, &Batch::new(generated_at, hooks).with_week_start(start))
        .with_context(|| format!("Failed to write {}", hooks_path.display()))?;
    write_batch(&variants_path, &Batch::new(generated_at, variants))
        .with_context(|| format!("Failed to write {}", variants_path.display()))?;
    write_batch(&queue_path, &Batch::new(generated_at, queue))
        .with_context(|| format!("Failed to write {}", queue_path.display()))?;

    println!("Wrote: {}", hooks_path.display());
    println!("Wrote: {}", variants_path.display());
    println!("Wrote: {}", queue_path.display());
    println!("Done. Review outputs before publishing.");

    Ok(())
}

fn print_schedule(queue: &[QueueItem]) {
    println!("Would queue {} drafts:", queue.len());
    for item in queue {
        println!(
            "  {}  {:<8}  {}",
            item.scheduled_local, item.platform, item.title
        );
    }
}
