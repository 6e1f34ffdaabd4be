//! Exported async request functions.
//!
//! A function body runs from its opening `{` to the first `}` after it, and
//! only the first `request.<verb>(...)` call inside that span is used.

use crate::model::{Method, ANY_TYPE};
use regex::Regex;
use std::sync::LazyLock;

static RE_ASYNC_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)export\s+async\s+function\s+(\w+)\s*\(([^)]*)\)[^{]*\{(.*?)\}").unwrap()
});

// request.get<T>("/path") with ", ' or ` quoting
static RE_REQUEST_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"request\.((?i:get|post|put|delete|patch))\b",
        r"(?:<([^()]+?)>)?",
        r#"\(\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)"#
    ))
    .unwrap()
});

/// A request function found in one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub func_name: String,
    /// Raw parameter list text
    pub params: String,
    /// Captured (possibly truncated) body
    pub body: String,
    pub method: Method,
    pub return_type: String,
    pub path: String,
    /// Byte offset of the `export` keyword
    pub offset: usize,
    /// Preceding doc-comment text, filled in by [`crate::parser::parse_file`]
    pub description: Option<String>,
}

/// Find every exported async function whose body calls `request.<verb>`.
///
/// Functions without such a call produce nothing.
pub fn extract_endpoints(text: &str) -> Vec<Endpoint> {
    let mut endpoints = Vec::new();
    for caps in RE_ASYNC_FN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let body = &caps[3];
        let Some(call) = find_request_call(body) else {
            continue;
        };
        endpoints.push(Endpoint {
            func_name: caps[1].to_string(),
            params: caps[2].to_string(),
            body: body.to_string(),
            method: call.method,
            return_type: call.return_type,
            path: call.path,
            offset: whole.start(),
            description: None,
        });
    }
    endpoints
}

struct RequestCall {
    method: Method,
    return_type: String,
    path: String,
}

fn find_request_call(body: &str) -> Option<RequestCall> {
    let caps = RE_REQUEST_CALL.captures(body)?;
    let method = Method::parse(&caps[1])?;
    let return_type = caps
        .get(2)
        .map_or_else(|| ANY_TYPE.to_string(), |m| m.as_str().to_string());
    let path = caps
        .get(3)
        .or_else(|| caps.get(4))
        .or_else(|| caps.get(5))
        .map(|m| m.as_str().to_string())?;
    Some(RequestCall {
        method,
        return_type,
        path,
    })
}
