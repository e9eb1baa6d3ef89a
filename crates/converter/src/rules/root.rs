//! Document root rules

use super::servers;
use crate::context::Context;
use crate::scope::{Handler, Placement, Scope};
use crate::traversal::{scalar_text, Walker};
use oas2raml_common::{Diagnostic, Result};
use serde_yaml::{Mapping, Value};

pub(crate) const RULES: &[(&str, Handler)] = &[
    ("openapi", Handler::Transform(openapi_version)),
    ("info", Handler::Descend(Scope::Info, Placement::InPlace)),
    ("servers", Handler::Transform(servers::servers)),
    ("paths", Handler::Descend(Scope::Paths, Placement::InPlace)),
];

/// Only OpenAPI 3.x is understood; anything else converts best-effort
fn openapi_version(
    walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    key: &str,
    value: &Value,
    _output: &mut Mapping,
) -> Result<()> {
    let version = scalar_text(value).unwrap_or_else(|| "<none>".to_string());
    if version.starts_with("3.") {
        tracing::debug!(version = %version, "converting OpenAPI document");
    } else {
        walker.report(Diagnostic::version_mismatch(&ctx.breadcrumb(key), &version));
    }
    Ok(())
}
