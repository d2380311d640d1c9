use super::QueueEntry;

const STUB_NAME_PREFIX: &str = "fursbliss";
const STUB_TITLE_MAX_CHARS: usize = 40;

const RULES: [&str; 3] = [
    "- Keep wording unchanged unless platform character limits require trimming.",
    "- Keep tone helpful and non-spammy.",
    "- Return a short confirmation with posted link or failure reason.",
];

/// Lowercase, map every non-alphanumeric char to `_`, trim `_` from both ends
pub fn normalize_name(text: &str) -> String {
    let mapped: String = text
        .chars()
        .flat_map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec!['_']
            }
        })
        .collect();
    mapped.trim_matches('_').to_string()
}

/// "Run this task" block for one queue item, `index` is 1-based
pub fn render_prompt_block(entry: &QueueEntry, index: usize) -> String {
    let platform = entry.platform();
    let title = entry.title();

    let mut lines = vec![
        format!("### {}. {} - {}", index, platform, title),
        String::new(),
        "Run this task:".to_string(),
        format!("Publish a draft {} on {}.", entry.content_type(), platform),
        format!("Scheduled local time: {}", entry.scheduled_local()),
        format!("Title: {}", title),
        format!("Body: {}", entry.body().trim()),
        format!("Destination URL: {}", entry.destination().trim()),
        "Rules:".to_string(),
    ];
    lines.extend(RULES.iter().map(|r| r.to_string()));
    lines.extend([String::new(), "---".to_string(), String::new()]);

    lines.join("\n")
}

/// Commented scheduling stub the user adapts to their own publish command
pub fn render_scheduled_stub(entry: &QueueEntry, index: usize) -> String {
    let platform = normalize_name(&entry.field("platform", "x"));
    let mut title: String = normalize_name(&entry.field("title", "untitled"))
        .chars()
        .take(STUB_TITLE_MAX_CHARS)
        .collect();
    if title.is_empty() {
        title = "item".to_string();
    }

    format!(
        "# schedule_stub_{}\n\
         # name={}_{}_{}\n\
         # when_local={}\n\
         # command=<your openclaw publish command here>\n",
        index,
        STUB_NAME_PREFIX,
        platform,
        title,
        entry.scheduled_local()
    )
}
