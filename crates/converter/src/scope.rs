//! Scopes and their dispatch tables
//!
//! Each structural position of an OpenAPI document has a closed table
//! mapping the field names it recognizes to a [`Handler`]. Scopes whose keys
//! are user-chosen names (resource paths, server variable names) apply one
//! handler to every key instead.

use crate::rules::{info, paths, root, servers};
use crate::traversal::Transform;

/// Structural position in the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Root,
    Info,
    Server,
    ServerVariables,
    ServerVariable,
    Paths,
    PathItem,
    Operation,
}

/// Where a descent writes its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Into the current output node
    InPlace,

    /// Into a child node with a fixed name, created on first use
    Under(&'static str),

    /// Into a child node named after the visited key
    Keyed,
}

/// What to do with a recognized field
#[derive(Clone, Copy)]
pub enum Handler {
    /// Copy the value unmodified under the same key
    Copy,

    /// Recognized, but RAML has no equivalent
    Skip,

    /// Walk the nested mapping with another scope
    Descend(Scope, Placement),

    /// Scope-specific rule
    Transform(Transform),
}

/// Dispatch table of a scope
#[derive(Clone, Copy)]
pub enum Rules {
    /// Closed set of recognized field names
    Fields(&'static [(&'static str, Handler)]),

    /// One handler for every key
    AnyKey(Handler),
}

impl Scope {
    pub fn rules(self) -> Rules {
        match self {
            Scope::Root => Rules::Fields(root::RULES),
            Scope::Info => Rules::Fields(info::RULES),
            Scope::Server => Rules::Fields(servers::SERVER_RULES),
            Scope::ServerVariables => Rules::AnyKey(servers::VARIABLES_RULE),
            Scope::ServerVariable => Rules::Fields(servers::VARIABLE_RULES),
            Scope::Paths => Rules::AnyKey(paths::PATHS_RULE),
            Scope::PathItem => Rules::Fields(paths::PATH_ITEM_RULES),
            Scope::Operation => Rules::Fields(paths::OPERATION_RULES),
        }
    }

    /// Handler registered for `field`, if the scope recognizes it
    pub fn handler(self, field: &str) -> Option<Handler> {
        match self.rules() {
            Rules::Fields(table) => table
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, handler)| *handler),
            Rules::AnyKey(handler) => Some(handler),
        }
    }

    /// Field names the scope recognizes, empty for scopes keyed by name
    pub fn fields(self) -> Vec<&'static str> {
        match self.rules() {
            Rules::Fields(table) => table.iter().map(|(name, _)| *name).collect(),
            Rules::AnyKey(_) => Vec::new(),
        }
    }
}
