//! OpenAPI 3.x document loading
//!
//! Decodes OpenAPI documents from YAML or JSON text into the generic,
//! insertion-ordered tree the converter walks. No typed model is built: the
//! converter only needs mappings, sequences and scalars.
//!
//! ## Usage
//! ```rust,ignore
//! use oas2raml_converter::openapi::OpenApiParser;
//!
//! let parser = OpenApiParser::from_file("petstore.yaml")?;
//! let conversion = parser.convert()?;
//! println!("{}", conversion.document.to_raml_string()?);
//! ```

mod parser;

pub use parser::OpenApiParser;
