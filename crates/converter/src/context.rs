//! Traversal context
//!
//! A [`Context`] is derived on every scope descent and dropped when that
//! scope returns. It never carries mutable state: path item defaults are
//! collected before the path item is walked and only borrowed afterwards.

use crate::scope::Scope;
use serde_yaml::{Mapping, Value};

/// Summary and description declared on a path item, applied to every
/// operation of that path item that does not declare its own
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathDefaults {
    pub summary: Option<Value>,
    pub description: Option<Value>,
}

impl PathDefaults {
    /// Collect the defaults of a path item, wherever they appear in it
    pub fn collect(path_item: &Mapping) -> Self {
        Self {
            summary: path_item.get("summary").filter(|v| is_present(v)).cloned(),
            description: path_item
                .get("description")
                .filter(|v| is_present(v))
                .cloned(),
        }
    }
}

/// Null and empty strings never act as an inherited default
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Position of the walker in the input document
#[derive(Debug, Clone)]
pub struct Context<'a> {
    path: String,
    scope: Scope,
    defaults: Option<&'a PathDefaults>,
}

impl<'a> Context<'a> {
    /// Context of the document root
    pub fn root() -> Self {
        Self {
            path: String::new(),
            scope: Scope::Root,
            defaults: None,
        }
    }

    /// Breadcrumb of the current scope
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Active dispatch table
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn defaults(&self) -> Option<&'a PathDefaults> {
        self.defaults
    }

    /// Breadcrumb of a key inside the current scope
    pub fn breadcrumb(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}/{}", self.path, key)
        }
    }

    /// Child context for `segment`, keeping inherited defaults
    pub fn descend(&self, segment: &str, scope: Scope) -> Context<'a> {
        Context {
            path: self.breadcrumb(segment),
            scope,
            defaults: self.defaults,
        }
    }

    /// Child context for a path item carrying its collected defaults
    pub fn path_item<'b>(&self, resource: &str, defaults: &'b PathDefaults) -> Context<'b> {
        Context {
            path: self.breadcrumb(resource),
            scope: Scope::PathItem,
            defaults: Some(defaults),
        }
    }
}
