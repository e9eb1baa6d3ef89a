//! OpenAPI file loader

use crate::{convert, Conversion};
use oas2raml_common::{ConverterError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Loaded OpenAPI document, ready to convert
pub struct OpenApiParser {
    document: Value,
}

impl OpenApiParser {
    /// Load an OpenAPI document from a YAML or JSON file
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = OpenApiParser::from_file("openapi.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConverterError::Parse(format!(
                "Failed to read OpenAPI file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse an OpenAPI document from YAML text (JSON is accepted as YAML)
    pub fn from_yaml(content: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(content).map_err(|e| {
            ConverterError::Parse(format!("Failed to parse OpenAPI document: {}", e))
        })?;

        if !document.is_mapping() {
            return Err(ConverterError::Parse(
                "OpenAPI document root must be a mapping".to_string(),
            ));
        }

        Ok(Self { document })
    }

    /// Get reference to the decoded document tree
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Convert the loaded document into RAML
    pub fn convert(&self) -> Result<Conversion> {
        convert(&self.document)
    }
}
