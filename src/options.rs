//! Scan configuration shared by the walker and the aggregator.

use crate::error::Result;
use glob::Pattern;

/// Default source extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "ts";

/// Order in which directory entries are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkOrder {
    /// Whatever order the OS directory listing returns.
    #[default]
    Listing,
    /// Entries sorted by file name within each directory.
    Sorted,
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Source extension without the dot; `.d.<ext>` files are skipped.
    pub extension: String,
    pub order: WalkOrder,
    /// Matched against forward-slash paths relative to the scan root.
    pub exclude: Vec<Pattern>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            extension: DEFAULT_EXTENSION.to_string(),
            order: WalkOrder::default(),
            exclude: Vec::new(),
        }
    }
}

impl ScanOptions {
    /// Compile exclusion globs, failing on the first invalid pattern.
    pub fn with_excludes<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self.exclude.push(Pattern::new(pattern.as_ref())?);
        }
        Ok(self)
    }

    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|p| p.matches(relative))
    }

    /// `.ts` style suffix for source files.
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    /// `.d.ts` style suffix for declaration-only files.
    pub fn declaration_suffix(&self) -> String {
        format!(".d.{}", self.extension)
    }
}
