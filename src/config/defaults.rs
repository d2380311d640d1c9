use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_brand_url() -> String {
    "https://www.fursbliss.com".to_string()
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("fursbliss_growth")
}

pub fn default_x_post_time() -> String {
    "09:15".to_string()
}

pub fn default_facebook_group_post_time() -> String {
    "12:30".to_string()
}

pub fn default_queue_path() -> PathBuf {
    PathBuf::from("fursbliss_growth/posting_queue.json")
}

pub fn default_commands_output() -> PathBuf {
    PathBuf::from("fursbliss_growth/openclaw_telegram_commands.md")
}
