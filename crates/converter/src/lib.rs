//! OpenAPI 3.x to RAML 1.0 conversion
//!
//! This crate converts an already decoded OpenAPI document into a RAML 1.0
//! document tree. Conversion is best-effort: only a subset of OpenAPI maps
//! onto RAML, and everything else is reported as a [`Diagnostic`] and
//! dropped instead of failing the run.
//!
//! ## Conversion Strategy
//!
//! A generic walker visits the keys of each mapping in document order and
//! dispatches them through the table of the current scope:
//! - `info` fields land on the RAML root, `termsOfService` as documentation
//! - `servers[0]` becomes `baseUri` and `baseUriParameters`
//! - each path string becomes one flat resource key
//! - operations keep `displayName`, `description`, query parameters and
//!   headers; path item `summary`/`description` act as their fallbacks
//!
//! ```rust,ignore
//! let document: serde_yaml::Value = serde_yaml::from_str(text)?;
//! let conversion = oas2raml_converter::convert(&document)?;
//! for diagnostic in &conversion.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

mod context;
pub mod openapi;
mod raml;
mod rules;
mod scope;
mod traversal;

pub use context::{Context, PathDefaults};
pub use openapi::OpenApiParser;
pub use raml::{RamlDocument, RAML_HEADER};
pub use rules::paths::ParameterLocation;
pub use scope::{Handler, Placement, Rules, Scope};
pub use traversal::{Transform, Walker};

pub use oas2raml_common::{
    ConverterError, Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics, Result, Severity,
};

use serde_yaml::{Mapping, Value};

/// Result of a conversion run
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: RamlDocument,

    /// Every diagnostic of the run, in emission order
    pub diagnostics: Diagnostics,
}

/// Convert an OpenAPI document tree, collecting diagnostics
pub fn convert(document: &Value) -> Result<Conversion> {
    let mut diagnostics = Diagnostics::new();
    let document = convert_with_sink(document, &mut diagnostics)?;
    Ok(Conversion {
        document,
        diagnostics,
    })
}

/// Convert an OpenAPI document tree, pushing diagnostics into `sink`
pub fn convert_with_sink(
    document: &Value,
    sink: &mut dyn DiagnosticSink,
) -> Result<RamlDocument> {
    let ctx = Context::root();
    let mut root = Mapping::new();
    if let Some(input) = traversal::mapping_of(document, "<root>")? {
        Walker::new(sink).visit(input, &mut root, &ctx)?;
    }
    Ok(RamlDocument::from_root(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_empty_document() {
        let conversion = convert(&Value::Null).unwrap();
        assert!(conversion.document.root().is_empty());
        assert!(conversion.diagnostics.is_empty());
    }

    #[test]
    fn test_sequence_root_rejected() {
        let document: Value = serde_yaml::from_str("- openapi\n").unwrap();
        assert!(matches!(
            convert(&document),
            Err(ConverterError::InvalidStructure { .. })
        ));
    }
}
