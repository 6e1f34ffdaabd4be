//! JSON artifact output.
//!
//! The documentation viewer reads this file as-is: pretty-printed with
//! two-space indentation and no trailing newline.

use crate::error::{Result, ScanError};
use crate::model::Category;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize the tree to pretty JSON.
pub fn to_json(tree: &[Category]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Overwrite `output` with the serialized tree, creating parent directories.
pub fn write_artifact(tree: &[Category], output: &Path) -> Result<()> {
    let json = to_json(tree)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScanError::io(parent, e))?;
    }
    fs::write(output, &json).map_err(|e| ScanError::io(output, e))?;
    info!(path = %output.display(), bytes = json.len(), "wrote api docs");
    Ok(())
}
