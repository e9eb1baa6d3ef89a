//! Common types and utilities for oas2raml
//!
//! This crate contains the error type and the diagnostic model shared by the
//! converter and the CLI.

mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics, Severity};

use thiserror::Error;

/// Errors that can occur while loading or converting a document
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Parse error: {0}")]
    Parse(String),

    /// The input tree does not have the shape the converter walks
    #[error("Invalid structure at '{path}': expected {expected}")]
    InvalidStructure { path: String, expected: &'static str },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConverterError {
    /// Build an [`ConverterError::InvalidStructure`] for a breadcrumb path
    pub fn invalid_structure(path: impl Into<String>, expected: &'static str) -> Self {
        ConverterError::InvalidStructure {
            path: path.into(),
            expected,
        }
    }
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_structure_message() {
        let err = ConverterError::invalid_structure("paths//pets/get", "a mapping");
        assert_eq!(
            err.to_string(),
            "Invalid structure at 'paths//pets/get': expected a mapping"
        );
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err: ConverterError = yaml_err.into();
        assert!(err.to_string().starts_with("YAML error:"));
    }
}
