mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use chrono::NaiveTime;
use defaults::*;
use std::path::Path;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "fursbliss.yaml";

/// Parsed posting times, always rendered as zero-padded `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingTimes {
    pub x_post: NaiveTime,
    pub facebook_group_post: NaiveTime,
}

impl ScheduleConfig {
    pub fn posting_times(&self) -> Result<PostingTimes, ConfigError> {
        Ok(PostingTimes {
            x_post: parse_schedule_time("x_post", &self.x_post)?,
            facebook_group_post: parse_schedule_time(
                "facebook_group_post",
                &self.facebook_group_post,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            brand_url: default_brand_url(),
            output_dir: default_output_dir(),
            schedule: ScheduleConfig::default(),
            commands: CommandsConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if it exists, built-in defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// An explicit path must exist; the implicit default file is optional
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_brand_url(&self.brand_url)?;
        self.schedule.posting_times()?;
        Ok(())
    }
}

/// Strip surrounding whitespace and every trailing `/` from a base URL
pub fn normalize_brand_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBrandUrl);
    }
    Ok(trimmed.to_string())
}

fn parse_schedule_time(field: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ConfigError::InvalidTime {
        field,
        value: value.to_string(),
    })
}
