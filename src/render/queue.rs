use crate::error::QueueError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A posting-queue item as read back from disk.
///
/// Items are kept as open mappings so partially populated or newer queue
/// files still render; each accessor falls back to a default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueEntry {
    fields: Map<String, Value>,
}

impl QueueEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// String form of `key`, or `default` when it is absent or null
    pub fn field(&self, key: &str, default: &str) -> String {
        match self.fields.get(key) {
            // null counts as absent rather than rendering "null"
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn platform(&self) -> String {
        self.field("platform", "X")
    }

    pub fn content_type(&self) -> String {
        self.field("content_type", "post")
    }

    pub fn scheduled_local(&self) -> String {
        self.field("scheduled_local", "unspecified")
    }

    pub fn title(&self) -> String {
        self.field("title", "Untitled")
    }

    pub fn body(&self) -> String {
        self.field("body", "")
    }

    pub fn destination(&self) -> String {
        self.field("destination", "")
    }
}

impl From<Value> for QueueEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::new(fields),
            other => {
                tracing::warn!("Queue item is not an object, rendering with defaults: {}", other);
                Self::default()
            }
        }
    }
}

/// Read a `{ "items": [...] }` queue file, preserving item order
pub fn load_queue(path: &Path) -> Result<Vec<QueueEntry>, QueueError> {
    let content = fs::read_to_string(path).map_err(|e| QueueError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_queue(&content)
}

fn parse_queue(content: &str) -> Result<Vec<QueueEntry>, QueueError> {
    let value: Value = serde_json::from_str(content)?;

    let items = match value {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => return Err(QueueError::InvalidFormat),
        },
        _ => return Err(QueueError::InvalidFormat),
    };

    tracing::debug!("Loaded {} queue items", items.len());
    Ok(items.into_iter().map(QueueEntry::from).collect())
}
