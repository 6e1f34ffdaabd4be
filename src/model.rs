//! Data model for the generated API documentation tree.
//!
//! The structures serialize directly into the JSON artifact read by the
//! documentation viewer, so field names follow its camelCase schema.

use indexmap::IndexMap;
use serde::Serialize;

/// Value of `status` on every endpoint.
pub const STATUS_ENABLED: &str = "enabled";

/// Value of `owner` on every endpoint.
pub const OWNER_SYSTEM: &str = "system";

/// Fallback `returnType` when the request call carries no type argument.
pub const ANY_TYPE: &str = "any";

/// Raw bodies of the exported `type`/`interface` declarations of one file.
///
/// Keys keep their first-insertion position; redeclaring a name replaces
/// its body in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeMap(IndexMap<String, String>);

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.0.insert(name.into(), body.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// HTTP verb of a documented request call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Parse a verb in any letter case.
    pub fn parse(verb: &str) -> Option<Self> {
        match verb.to_ascii_lowercase().as_str() {
            "get" => Some(Method::Get),
            "post" => Some(Method::Post),
            "put" => Some(Method::Put),
            "delete" => Some(Method::Delete),
            "patch" => Some(Method::Patch),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented request function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// `{category}-{funcName}`
    pub id: String,
    /// Doc-comment text, or the function name when there is none
    pub name: String,
    pub method: Method,
    /// First string literal passed to the request call, uninterpolated
    pub path: String,
    pub status: String,
    pub owner: String,
    pub func_name: String,
    /// Raw parameter list text
    pub params: String,
    pub return_type: String,
    /// Every type declared in the endpoint's file
    pub types: TypeMap,
}

/// Endpoints of one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub children: Vec<EndpointDescriptor>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Category {
            id: name.clone(),
            name,
            children: Vec::new(),
        }
    }
}

/// Complete documentation tree, categories in first-discovery order.
pub type DocTree = Vec<Category>;
