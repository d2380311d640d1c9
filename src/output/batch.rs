use super::ensure_parent_dir;
use crate::error::OutputError;
use crate::planner::Batch;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write a batch envelope as pretty JSON, replacing any existing file
pub fn write_batch<T: Serialize>(path: &Path, batch: &Batch<T>) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(batch)?;
    fs::write(path, json).map_err(OutputError::Write)?;
    tracing::debug!("Wrote {} items to {:?}", batch.count, path);
    Ok(())
}
