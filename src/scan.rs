//! Aggregation of per-file extractions into the documentation tree.
//!
//! [`scan_sources`] is pure and works on in-memory text; [`scan`] adds the
//! directory walk and file reads in front of it.

use crate::error::{Result, ScanError};
use crate::model::{Category, DocTree, EndpointDescriptor, OWNER_SYSTEM, STATUS_ENABLED};
use crate::options::ScanOptions;
use crate::parser;
use crate::walk::{self, slash_path};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Derive a category name: `front/home.ts` → `front/home`.
pub fn category_name(relative: &Path, extension: &str) -> String {
    let joined = slash_path(relative);
    let suffix = format!(".{}", extension);
    match joined.strip_suffix(&suffix) {
        Some(stem) => stem.to_string(),
        None => joined,
    }
}

/// Build the tree from `(relative path, source text)` pairs, in order.
///
/// Categories appear in the order their first endpoint is found; files
/// without endpoints contribute nothing.
pub fn scan_sources<P, S, I>(files: I, options: &ScanOptions) -> DocTree
where
    P: AsRef<Path>,
    S: AsRef<str>,
    I: IntoIterator<Item = (P, S)>,
{
    let mut builder = TreeBuilder::default();
    for (relative, text) in files {
        builder.add_file(relative.as_ref(), text.as_ref(), options);
    }
    builder.finish()
}

/// Walk `root`, read every candidate file, and build the tree.
///
/// The first unreadable file aborts the scan.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<DocTree> {
    let files = walk::walk(root, options)?;
    let mut builder = TreeBuilder::default();
    for file in &files {
        let bytes = fs::read(&file.path).map_err(|e| ScanError::io(&file.path, e))?;
        // Invalid UTF-8 decodes to U+FFFD instead of failing the run.
        let text = String::from_utf8_lossy(&bytes);
        builder.add_file(&file.relative, &text, options);
    }
    let tree = builder.finish();
    info!(
        files = files.len(),
        categories = tree.len(),
        endpoints = tree.iter().map(|c| c.children.len()).sum::<usize>(),
        "scan complete"
    );
    Ok(tree)
}

#[derive(Default)]
struct TreeBuilder {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl TreeBuilder {
    fn add_file(&mut self, relative: &Path, text: &str, options: &ScanOptions) {
        let name = category_name(relative, &options.extension);
        let extraction = parser::parse_file(text);
        debug!(
            category = %name,
            endpoints = extraction.endpoints.len(),
            types = extraction.types.len(),
            "parsed file"
        );

        for ep in extraction.endpoints {
            let slot = match self.index.get(&name) {
                Some(&slot) => slot,
                None => {
                    self.categories.push(Category::new(name.clone()));
                    self.index.insert(name.clone(), self.categories.len() - 1);
                    self.categories.len() - 1
                }
            };
            self.categories[slot].children.push(EndpointDescriptor {
                id: format!("{}-{}", name, ep.func_name),
                name: ep.description.unwrap_or_else(|| ep.func_name.clone()),
                method: ep.method,
                path: ep.path,
                status: STATUS_ENABLED.to_string(),
                owner: OWNER_SYSTEM.to_string(),
                func_name: ep.func_name,
                params: ep.params,
                return_type: ep.return_type,
                types: extraction.types.clone(),
            });
        }
    }

    fn finish(self) -> DocTree {
        self.categories
    }
}
