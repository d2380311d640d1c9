mod batch;
mod document;

pub use batch::write_batch;
pub use document::write_document;

use crate::error::OutputError;
use std::fs;
use std::path::Path;

/// Create the parent directory of `path` (and its parents) if needed
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(OutputError::CreateDir)
        }
        _ => Ok(()),
    }
}
