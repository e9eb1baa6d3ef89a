//! RAML output assembly

use oas2raml_common::Result;
use serde_yaml::{Mapping, Value};

/// First line of every RAML 1.0 document
pub const RAML_HEADER: &str = "#%RAML 1.0";

/// Root node of a converted RAML document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RamlDocument {
    root: Mapping,
}

impl RamlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_root(root: Mapping) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Top-level value, e.g. `title` or a resource path
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Resource node for a literal OpenAPI path string
    pub fn resource(&self, path: &str) -> Option<&Mapping> {
        self.root.get(path).and_then(Value::as_mapping)
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.root)
    }

    /// Serialize as RAML text, header line included
    pub fn to_raml_string(&self) -> Result<String> {
        let body = if self.root.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.root)?
        };
        Ok(format!("{}\n{}", RAML_HEADER, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_first_line() {
        let root: Mapping = serde_yaml::from_str("title: Pets API\nversion: '1.0'\n").unwrap();
        let text = RamlDocument::from_root(root).to_raml_string().unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("#%RAML 1.0"));
        assert_eq!(lines.next(), Some("title: Pets API"));
    }

    #[test]
    fn test_output_parses_back() {
        let root: Mapping = serde_yaml::from_str(
            "title: Pets API\n/pets:\n  get:\n    queryParameters:\n      limit: {}\n",
        )
        .unwrap();
        let document = RamlDocument::from_root(root.clone());
        let text = document.to_raml_string().unwrap();

        // The header is a YAML comment
        let reparsed: Mapping = serde_yaml::from_str(&text).unwrap();
        assert_eq!(reparsed, root);
        assert!(document.resource("/pets").is_some());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(RamlDocument::new().to_raml_string().unwrap(), "#%RAML 1.0\n");
    }
}
