//! Paths, path item and operation rules
//!
//! Every OpenAPI path string becomes one flat RAML resource key, unchanged.
//! A path item's `summary` and `description` are collected before its
//! operations are walked, then used as the fallback `displayName` and
//! `description` of every operation that does not declare its own.

use crate::context::{is_present, Context, PathDefaults};
use crate::scope::{Handler, Scope};
use crate::traversal::{child_mapping, mapping_of, scalar_text, sequence_of, Walker};
use oas2raml_common::{Diagnostic, Result};
use serde_yaml::{Mapping, Value};

pub(crate) const PATHS_RULE: Handler = Handler::Transform(path_item);

pub(crate) const PATH_ITEM_RULES: &[(&str, Handler)] = &[
    ("$ref", Handler::Skip),
    ("summary", Handler::Transform(inherited_default)),
    ("description", Handler::Transform(inherited_default)),
    ("get", Handler::Transform(operation)),
    ("put", Handler::Transform(operation)),
    ("post", Handler::Transform(operation)),
    ("delete", Handler::Transform(operation)),
    ("options", Handler::Transform(operation)),
    ("head", Handler::Transform(operation)),
    ("patch", Handler::Transform(operation)),
    ("trace", Handler::Skip),
    ("servers", Handler::Skip),
    // Shared path item parameters are not propagated to operations
    ("parameters", Handler::Skip),
];

pub(crate) const OPERATION_RULES: &[(&str, Handler)] = &[
    ("tags", Handler::Skip),
    ("summary", Handler::Transform(display_name)),
    ("description", Handler::Copy),
    ("externalDocs", Handler::Skip),
    ("operationId", Handler::Skip),
    ("parameters", Handler::Transform(parameters)),
    ("requestBody", Handler::Skip),
    ("responses", Handler::Skip),
    ("deprecated", Handler::Skip),
    ("security", Handler::Skip),
    ("servers", Handler::Skip),
];

/// Location of an operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl ParameterLocation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "path" => Some(ParameterLocation::Path),
            "cookie" => Some(ParameterLocation::Cookie),
            _ => None,
        }
    }

    /// RAML operation key collecting parameters of this location
    ///
    /// Path and cookie parameters have no bucket: RAML declares URI
    /// parameters on the resource, which this converter does not populate.
    pub fn bucket(self) -> Option<&'static str> {
        match self {
            ParameterLocation::Query => Some("queryParameters"),
            ParameterLocation::Header => Some("headers"),
            ParameterLocation::Path | ParameterLocation::Cookie => None,
        }
    }
}

/// Converts one path item into the resource keyed by its literal path
fn path_item(
    walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    resource: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    // Specification extensions share the Paths object with path strings
    if resource.starts_with("x-") {
        walker.report(Diagnostic::unsupported_field(&ctx.breadcrumb(resource)));
        return Ok(());
    }

    let node = child_mapping(output, resource);
    let Some(item) = mapping_of(value, &ctx.breadcrumb(resource))? else {
        return Ok(());
    };

    let defaults = PathDefaults::collect(item);
    let child = ctx.path_item(resource, &defaults);
    tracing::debug!(resource = %resource, "converting path item");
    walker.visit(item, node, &child)
}

/// Path item summary/description: already collected as defaults
fn inherited_default(
    _walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    key: &str,
    _value: &Value,
    _output: &mut Mapping,
) -> Result<()> {
    tracing::trace!(path = %ctx.breadcrumb(key), "inherited by operations");
    Ok(())
}

fn operation(
    walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    method: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    let child = ctx.descend(method, Scope::Operation);
    let mut node = Mapping::new();
    if let Some(operation) = mapping_of(value, child.path())? {
        walker.visit(operation, &mut node, &child)?;
    }

    if let Some(defaults) = ctx.defaults() {
        inherit(&mut node, "displayName", defaults.summary.as_ref());
        inherit(&mut node, "description", defaults.description.as_ref());
    }

    output.insert(Value::from(method), Value::Mapping(node));
    Ok(())
}

fn inherit(node: &mut Mapping, key: &str, default: Option<&Value>) {
    let Some(default) = default else {
        return;
    };
    if node.get(key).map_or(true, |own| !is_present(own)) {
        node.insert(Value::from(key), default.clone());
    }
}

fn display_name(
    _walker: &mut Walker<'_>,
    _ctx: &Context<'_>,
    _key: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    output.insert(Value::from("displayName"), value.clone());
    Ok(())
}

/// Buckets query and header parameters into `queryParameters` and `headers`
fn parameters(
    walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    key: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    let path = ctx.breadcrumb(key);
    let Some(parameters) = sequence_of(value, &path)? else {
        return Ok(());
    };

    for (index, parameter) in parameters.iter().enumerate() {
        let entry_path = format!("{}[{}]", path, index);
        let Some(parameter) = mapping_of(parameter, &entry_path)? else {
            continue;
        };

        // References are left unresolved
        if let Some(reference) = parameter.get("$ref") {
            let reference = scalar_text(reference).unwrap_or_default();
            walker.report(Diagnostic::unresolved_reference(&entry_path, &reference));
            continue;
        }

        let Some(name) = parameter.get("name").and_then(scalar_text) else {
            continue;
        };
        let location = parameter
            .get("in")
            .and_then(Value::as_str)
            .and_then(ParameterLocation::from_name);

        match location.and_then(ParameterLocation::bucket) {
            Some(bucket) => {
                child_mapping(output, bucket)
                    .insert(Value::from(name), Value::Mapping(Mapping::new()));
            }
            None => {
                tracing::trace!(path = %entry_path, location = ?location, "parameter not bucketed");
            }
        }
    }
    Ok(())
}
