//! Servers block rules
//!
//! RAML has a single `baseUri`, so only the first server is converted. Its
//! `{variable}` placeholders are kept verbatim since RAML templates base URIs
//! the same way, and the variables become `baseUriParameters`.

use crate::context::Context;
use crate::scope::{Handler, Placement, Scope};
use crate::traversal::{mapping_of, sequence_of, Walker};
use oas2raml_common::{Diagnostic, Result};
use serde_yaml::{Mapping, Value};

pub(crate) const SERVER_RULES: &[(&str, Handler)] = &[
    ("url", Handler::Transform(base_uri)),
    (
        "variables",
        Handler::Descend(Scope::ServerVariables, Placement::Under("baseUriParameters")),
    ),
];

pub(crate) const VARIABLES_RULE: Handler =
    Handler::Descend(Scope::ServerVariable, Placement::Keyed);

pub(crate) const VARIABLE_RULES: &[(&str, Handler)] = &[
    ("enum", Handler::Copy),
    ("default", Handler::Copy),
    ("description", Handler::Copy),
];

/// Walks `servers[0]` in place on the RAML root
pub(crate) fn servers(
    walker: &mut Walker<'_>,
    ctx: &Context<'_>,
    key: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    let path = ctx.breadcrumb(key);
    let Some(servers) = sequence_of(value, &path)? else {
        return Ok(());
    };

    if servers.len() > 1 {
        walker.report(Diagnostic::incompatible_cardinality(&path, servers.len()));
    }

    let Some(first) = servers.first() else {
        return Ok(());
    };
    let child = ctx.descend(&format!("{}[0]", key), Scope::Server);
    match mapping_of(first, child.path())? {
        Some(server) => walker.visit(server, output, &child),
        None => Ok(()),
    }
}

fn base_uri(
    _walker: &mut Walker<'_>,
    _ctx: &Context<'_>,
    _key: &str,
    value: &Value,
    output: &mut Mapping,
) -> Result<()> {
    output.insert(Value::from("baseUri"), value.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas2raml_common::{DiagnosticKind, Diagnostics};

    fn convert_root(yaml: &str) -> (Mapping, Diagnostics) {
        let input: Mapping = serde_yaml::from_str(yaml).unwrap();
        let mut diagnostics = Diagnostics::new();
        let mut output = Mapping::new();
        Walker::new(&mut diagnostics)
            .visit(&input, &mut output, &Context::root())
            .unwrap();
        (output, diagnostics)
    }

    #[test]
    fn test_first_server_only() {
        let (output, diagnostics) = convert_root(
            r#"
servers:
  - url: https://one.example.com
  - url: https://two.example.com
"#,
        );

        assert_eq!(
            output.get("baseUri"),
            Some(&Value::from("https://one.example.com"))
        );
        assert_eq!(diagnostics.len(), 1);
        let warning = &diagnostics.as_slice()[0];
        assert_eq!(warning.kind, DiagnosticKind::IncompatibleCardinality);
        assert_eq!(warning.path, "servers");
    }

    #[test]
    fn test_variables_become_base_uri_parameters() {
        let (output, diagnostics) = convert_root(
            r#"
servers:
  - url: "https://{region}.example.com"
    variables:
      region:
        default: eu
        enum: [eu, us]
        description: Deployment region
"#,
        );

        let expected: Mapping = serde_yaml::from_str(
            r#"
baseUri: "https://{region}.example.com"
baseUriParameters:
  region:
    default: eu
    enum: [eu, us]
    description: Deployment region
"#,
        )
        .unwrap();
        assert_eq!(output, expected);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_server_fields_reported_with_index() {
        let (output, diagnostics) = convert_root(
            r#"
servers:
  - url: https://api.example.com
    description: Production
    variables:
      port:
        default: "443"
        x-internal: true
"#,
        );

        let paths: Vec<_> = diagnostics.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["servers[0]/description", "servers[0]/variables/port/x-internal"]
        );
        assert!(output.get("description").is_none());
    }

    #[test]
    fn test_empty_servers() {
        let (output, diagnostics) = convert_root("servers: []\n");
        assert!(output.is_empty());
        assert!(diagnostics.is_empty());
    }
}
