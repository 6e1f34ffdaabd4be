//! Regex extraction of request functions and types from one source file.

pub mod comment;
pub mod declaration;
pub mod endpoint;

use crate::model::TypeMap;
pub use endpoint::Endpoint;

/// Everything documented by a single file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub types: TypeMap,
    /// Source order
    pub endpoints: Vec<Endpoint>,
}

/// Extract types and request functions, resolving each function's doc comment.
pub fn parse_file(text: &str) -> FileExtraction {
    let types = declaration::extract_types(text);
    let mut endpoints = endpoint::extract_endpoints(text);
    for ep in &mut endpoints {
        ep.description = comment::describe(text, ep.offset);
    }
    FileExtraction { types, endpoints }
}
