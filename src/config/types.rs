use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base URL used for CTA destinations
    #[serde(default = "default_brand_url")]
    pub brand_url: String,

    /// Directory where the planner writes its JSON batches
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

/// Local posting times, `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ScheduleConfig {
    #[serde(default = "default_x_post_time")]
    pub x_post: String,

    #[serde(default = "default_facebook_group_post_time")]
    pub facebook_group_post: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            x_post: default_x_post_time(),
            facebook_group_post: default_facebook_group_post_time(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CommandsConfig {
    /// Posting queue consumed by `commands`
    #[serde(default = "default_queue_path")]
    pub queue: PathBuf,

    /// Markdown file written by `commands`
    #[serde(default = "default_commands_output")]
    pub output: PathBuf,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            queue: default_queue_path(),
            output: default_commands_output(),
        }
    }
}
