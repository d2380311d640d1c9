//! Posting queue to instruction document
//!
//! Turns `posting_queue.json` into a Markdown file of copy/paste task
//! blocks followed by optional scheduling stubs. Rendering never fails;
//! only loading the queue can.

mod prompt;
mod queue;

pub use prompt::{render_prompt_block, render_scheduled_stub};
pub use queue::{load_queue, QueueEntry};

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::planner::format_generated_at;

/// Assemble the full document: header, one block per entry, then the stubs
pub fn build_document(
    entries: &[QueueEntry],
    source: &Path,
    generated_at: DateTime<Utc>,
) -> String {
    let mut parts: Vec<String> = vec![
        "# OpenClaw Telegram Commands (Generated)".to_string(),
        String::new(),
        format!("- Generated UTC: {}", format_generated_at(generated_at)),
        format!("- Source queue: `{}`", source.display()),
        format!("- Items: {}", entries.len()),
        String::new(),
        "Copy/paste each `Run this task:` block into OpenClaw Telegram.".to_string(),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    parts.extend(
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| render_prompt_block(entry, i + 1)),
    );

    parts.extend([
        "## Optional Scheduling Stubs".to_string(),
        String::new(),
        "If you want recurring scheduled tasks in OpenClaw command format, adapt these:"
            .to_string(),
        String::new(),
    ]);

    parts.extend(
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| render_scheduled_stub(entry, i + 1)),
    );

    parts.join("\n")
}
