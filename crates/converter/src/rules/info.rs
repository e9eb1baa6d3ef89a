//! Info block rules
//!
//! The info block is walked in place: its fields land on the RAML root.

use crate::context::Context;
use crate::scope::Handler;
use crate::traversal::{child_sequence, scalar_text, Walker};
use oas2raml_common::{ConverterError, Result};
use serde_yaml::{Mapping, Value};

pub(crate) const RULES: &[(&str, Handler)] = &[
    ("title", Handler::Copy),
    ("description", Handler::Copy),
    ("termsOfService", Handler::Transform(terms_of_service)),
    ("contact", Handler::Skip),
    ("license", Handler::Skip),
    ("version", Handler::Copy),
];

/// Appends a documentation entry linking to the terms of service
fn terms_of_service(
    _walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    key: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    let url = scalar_text(value)
        .ok_or_else(|| ConverterError::invalid_structure(ctx.breadcrumb(key), "a URL"))?;

    let mut entry = Mapping::new();
    entry.insert(Value::from("title"), Value::from("Terms of Service"));
    entry.insert(
        Value::from("content"),
        Value::from(format!("[Terms of Service]({})", url)),
    );
    child_sequence(output, "documentation").push(Value::Mapping(entry));
    Ok(())
}
