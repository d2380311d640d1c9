//! Records produced by the content planner

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One day's marketing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub day: NaiveDate,
    pub angle: String,
    pub hook: String,
    pub cta: String,
    pub destination: String,
}

/// Pre-authored paid ad creative brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVariant {
    pub name: String,
    pub audience: String,
    pub creative_direction: String,
    pub primary_text: String,
    pub headline: String,
    pub cta_label: String,
    pub destination: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    X,
    Facebook,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Platform::X => "X",
            Platform::Facebook => "Facebook",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Post,
    GroupPost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
}

/// Scheduled draft post awaiting manual review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub platform: Platform,
    pub content_type: ContentType,
    /// `YYYY-MM-DD HH:MM`, local time
    pub scheduled_local: String,
    pub title: String,
    pub body: String,
    pub destination: String,
    #[serde(default)]
    pub status: PostStatus,
}

/// JSON wrapper shared by every generated file.
///
/// `count` is derived from `items` at construction and is never set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch<T> {
    pub generated_at_utc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<NaiveDate>,
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> Batch<T> {
    pub fn new(generated_at: DateTime<Utc>, items: Vec<T>) -> Self {
        Self {
            generated_at_utc: format_generated_at(generated_at),
            week_start: None,
            count: items.len(),
            items,
        }
    }

    pub fn with_week_start(mut self, week_start: NaiveDate) -> Self {
        self.week_start = Some(week_start);
        self
    }
}

/// RFC 3339 with microseconds and an explicit `+00:00` offset
pub fn format_generated_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
