//! Exported `type` / `interface` declarations.
//!
//! The body is matched non-greedily up to the first `}`, so a declaration
//! containing a nested object literal is cut at the inner closing brace.
//! Existing generated docs depend on that exact capture.

use crate::model::TypeMap;
use regex::Regex;
use std::sync::LazyLock;

static RE_TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)export\s+(?:type|interface)\s+(\w+)\s*=?\s*\{(.*?)\}").unwrap()
});

/// Collect the raw body text of every exported type in `text`.
///
/// Declarations that don't match the pattern are skipped silently.
pub fn extract_types(text: &str) -> TypeMap {
    let mut types = TypeMap::new();
    for caps in RE_TYPE_DECL.captures_iter(text) {
        types.insert(&caps[1], &caps[2]);
    }
    types
}
