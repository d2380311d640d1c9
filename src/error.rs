use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Brand URL must not be empty")]
    EmptyBrandUrl,

    #[error("Invalid schedule time '{value}' for {field}: expected HH:MM")]
    InvalidTime { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid start date '{value}': expected YYYY-MM-DD ({source})")]
    InvalidStartDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid start date '{0}': expected zero-padded YYYY-MM-DD")]
    NonCanonicalStartDate(String),

    #[error("Week starting {0} runs past the supported calendar range")]
    DateOutOfRange(chrono::NaiveDate),
}

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Failed to read queue file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse queue JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid queue JSON format: expected {{ items: [] }}")]
    InvalidFormat,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
