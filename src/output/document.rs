use super::ensure_parent_dir;
use crate::error::OutputError;
use std::fs;
use std::path::Path;

pub fn write_document(path: &Path, content: &str) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(OutputError::Write)
}
