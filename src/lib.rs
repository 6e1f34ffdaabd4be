//! apidoc — API documentation generator for TypeScript request modules.
//!
//! Walks an API source directory, finds exported async functions that call
//! `request.<verb>(...)`, mines their doc comments and the file's exported
//! types, and writes the result as a JSON tree grouped by source file.
//!
//! ```rust,no_run
//! use apidoc::{scan, write_artifact, ScanOptions};
//! use std::path::Path;
//!
//! let tree = scan(Path::new("src/api"), &ScanOptions::default())?;
//! write_artifact(&tree, Path::new("src/data/api-docs.json"))?;
//! # Ok::<(), apidoc::ScanError>(())
//! ```

pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;
pub mod scan;
pub mod walk;

pub use error::{Result, ScanError};
pub use model::{Category, DocTree, EndpointDescriptor, Method, TypeMap};
pub use options::{ScanOptions, WalkOrder};
pub use render::{to_json, write_artifact};
pub use scan::{category_name, scan, scan_sources};
