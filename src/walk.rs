//! Recursive discovery of source files under the API directory.

use crate::error::{Result, ScanError};
use crate::options::{ScanOptions, WalkOrder};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// A source module found during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the scan root.
    pub relative: PathBuf,
}

/// Collect candidate source files under `root`, depth-first.
///
/// Any directory listing or stat failure aborts the walk.
pub fn walk(root: &Path, options: &ScanOptions) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    walk_dir(root, root, options, &mut files)?;
    debug!(root = %root.display(), count = files.len(), "walk complete");
    Ok(files)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    options: &ScanOptions,
    out: &mut Vec<SourceFile>,
) -> Result<()> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        paths.push(entry.path());
    }
    if options.order == WalkOrder::Sorted {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    for path in paths {
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if options.is_excluded(&slash_path(&relative)) {
            trace!(path = %relative.display(), "excluded");
            continue;
        }

        // Follows symlinks, like a plain stat.
        let meta = fs::metadata(&path).map_err(|e| ScanError::io(&path, e))?;
        if meta.is_dir() {
            walk_dir(root, &path, options, out)?;
        } else if is_candidate(&path, options) {
            out.push(SourceFile { path, relative });
        }
    }
    Ok(())
}

/// Source files end in `.<ext>` but not `.d.<ext>`.
fn is_candidate(path: &Path, options: &ScanOptions) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(&options.source_suffix()) && !name.ends_with(&options.declaration_suffix())
}

/// Join the normal components of a relative path with `/`.
pub fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
