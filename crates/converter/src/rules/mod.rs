//! Conversion rule sets, one module per region of the OpenAPI document

pub(crate) mod info;
pub(crate) mod paths;
pub(crate) mod root;
pub(crate) mod servers;
