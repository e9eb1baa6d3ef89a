//! Conversion diagnostics
//!
//! Every construct the converter cannot carry over is reported as a
//! [`Diagnostic`] instead of failing the conversion. Diagnostics are pushed
//! into a [`DiagnosticSink`] that the caller owns, so tooling can assert on
//! the exact sequence a run produced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What went wrong at a given location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The key has no handler in the active scope
    UnsupportedField,

    /// The key is known but RAML has no equivalent
    UnsupportedByTarget,

    /// More servers were declared than RAML can express
    IncompatibleCardinality,

    /// The `openapi` version is not 3.x
    VersionMismatch,

    /// A `$ref` was left as-is
    UnresolvedReference,
}

impl DiagnosticKind {
    /// Severity every diagnostic of this kind is reported with
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::VersionMismatch => Severity::Error,
            DiagnosticKind::UnsupportedField
            | DiagnosticKind::UnsupportedByTarget
            | DiagnosticKind::IncompatibleCardinality
            | DiagnosticKind::UnresolvedReference => Severity::Warning,
        }
    }
}

/// A single leveled, non-fatal conversion message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,

    /// Breadcrumb path of the input location (e.g. `paths//pets/get`)
    pub path: String,

    pub message: String,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, path: &str, message: String) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            path: path.to_string(),
            message,
        }
    }

    pub fn unsupported_field(path: &str) -> Self {
        Self::new(
            DiagnosticKind::UnsupportedField,
            path,
            format!("skipping {}: not supported", path),
        )
    }

    pub fn unsupported_by_target(path: &str) -> Self {
        Self::new(
            DiagnosticKind::UnsupportedByTarget,
            path,
            format!("skipping {}: not supported by RAML", path),
        )
    }

    pub fn incompatible_cardinality(path: &str, count: usize) -> Self {
        Self::new(
            DiagnosticKind::IncompatibleCardinality,
            path,
            format!(
                "partial conversion of {}: RAML is limited to one base URI, ignoring {} of {} servers",
                path,
                count.saturating_sub(1),
                count
            ),
        )
    }

    pub fn version_mismatch(path: &str, version: &str) -> Self {
        Self::new(
            DiagnosticKind::VersionMismatch,
            path,
            format!("OpenAPI version {} is not supported", version),
        )
    }

    pub fn unresolved_reference(path: &str, reference: &str) -> Self {
        Self::new(
            DiagnosticKind::UnresolvedReference,
            path,
            format!("skipping {}: reference {} is not resolved", path, reference),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Receiver of diagnostics during a conversion run
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Ordered collection of diagnostics
///
/// The default sink: keeps every diagnostic in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Diagnostics of the given kind, in emission order
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|d| d.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl DiagnosticSink for Diagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_severity() {
        assert_eq!(
            DiagnosticKind::VersionMismatch.severity(),
            Severity::Error
        );
        assert_eq!(
            DiagnosticKind::UnsupportedField.severity(),
            Severity::Warning
        );
        assert_eq!(
            DiagnosticKind::IncompatibleCardinality.severity(),
            Severity::Warning
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Diagnostic::unsupported_field("components").message,
            "skipping components: not supported"
        );
        assert_eq!(
            Diagnostic::unsupported_by_target("info/contact").message,
            "skipping info/contact: not supported by RAML"
        );
        assert_eq!(
            Diagnostic::version_mismatch("openapi", "2.0").to_string(),
            "error: OpenAPI version 2.0 is not supported"
        );
    }

    #[test]
    fn test_collection_counts() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.emit(Diagnostic::unsupported_field("components"));
        diagnostics.emit(Diagnostic::incompatible_cardinality("servers", 3));
        diagnostics.emit(Diagnostic::version_mismatch("openapi", "2.0"));

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count(Severity::Warning), 2);
        assert_eq!(diagnostics.count(Severity::Error), 1);
        assert!(diagnostics.has_errors());
        assert_eq!(
            diagnostics
                .of_kind(DiagnosticKind::IncompatibleCardinality)
                .count(),
            1
        );
    }

    #[test]
    fn test_serialize_report() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.emit(Diagnostic::unsupported_by_target("info/license"));

        let json = serde_json::to_value(&diagnostics).unwrap();
        assert_eq!(json[0]["kind"], "unsupported_by_target");
        assert_eq!(json[0]["severity"], "warning");
        assert_eq!(json[0]["path"], "info/license");
    }
}
