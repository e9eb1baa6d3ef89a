//! Scoped traversal engine
//!
//! The walker knows nothing about OpenAPI or RAML. It enumerates the keys of
//! an input mapping in document order, looks each one up in the active
//! scope's dispatch table and applies the handler, or reports the key as
//! unsupported and moves on.

use crate::context::Context;
use crate::scope::{Handler, Placement};
use oas2raml_common::{ConverterError, Diagnostic, DiagnosticSink, Result, Severity};
use serde_yaml::{Mapping, Sequence, Value};

/// Scope-specific rule: `(walker, context, key, input value, output node)`
pub type Transform =
    fn(&mut Walker<'_>, &Context<'_>, &str, &Value, &mut Mapping) -> Result<()>;

/// Depth-first walker threading a diagnostic sink through every scope
pub struct Walker<'s> {
    sink: &'s mut dyn DiagnosticSink,
}

impl<'s> Walker<'s> {
    pub fn new(sink: &'s mut dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Visit every key of `input`, writing into `output`
    pub fn visit(
        &mut self,
        input: &Mapping,
        output: &mut Mapping,
        ctx: &Context<'_>,
    ) -> Result<()> {
        for (key, value) in input {
            let field = key_text(key, ctx)?;
            match ctx.scope().handler(&field) {
                Some(handler) => self.apply(handler, &field, value, output, ctx)?,
                None => self.report(Diagnostic::unsupported_field(&ctx.breadcrumb(&field))),
            }
        }
        Ok(())
    }

    fn apply(
        &mut self,
        handler: Handler,
        field: &str,
        value: &Value,
        output: &mut Mapping,
        ctx: &Context<'_>,
    ) -> Result<()> {
        match handler {
            Handler::Copy => {
                output.insert(Value::from(field), value.clone());
                Ok(())
            }
            Handler::Skip => {
                self.report(Diagnostic::unsupported_by_target(&ctx.breadcrumb(field)));
                Ok(())
            }
            Handler::Descend(scope, placement) => {
                let child = ctx.descend(field, scope);
                tracing::trace!(path = %child.path(), scope = ?scope, "descending");

                let target = match placement {
                    Placement::InPlace => output,
                    Placement::Under(name) => child_mapping(output, name),
                    Placement::Keyed => child_mapping(output, field),
                };
                match mapping_of(value, child.path())? {
                    Some(input) => self.visit(input, target, &child),
                    None => Ok(()),
                }
            }
            Handler::Transform(transform) => transform(self, ctx, field, value, output),
        }
    }

    /// Record a diagnostic and mirror it to the log
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(path = %diagnostic.path, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(path = %diagnostic.path, "{}", diagnostic.message)
            }
        }
        self.sink.emit(diagnostic);
    }
}

/// Text of a mapping key; scalar keys only
fn key_text(key: &Value, ctx: &Context<'_>) -> Result<String> {
    scalar_text(key).ok_or_else(|| {
        ConverterError::invalid_structure(ctx.breadcrumb("<key>"), "a scalar key")
    })
}

/// Rendering of a scalar value, `None` for mappings, sequences and null
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// The mapping held by `value`, `None` when the value is null
pub fn mapping_of<'v>(value: &'v Value, path: &str) -> Result<Option<&'v Mapping>> {
    match value {
        Value::Mapping(mapping) => Ok(Some(mapping)),
        Value::Null => Ok(None),
        _ => Err(ConverterError::invalid_structure(path, "a mapping")),
    }
}

/// The sequence held by `value`, `None` when the value is null
pub fn sequence_of<'v>(value: &'v Value, path: &str) -> Result<Option<&'v Sequence>> {
    match value {
        Value::Sequence(sequence) => Ok(Some(sequence)),
        Value::Null => Ok(None),
        _ => Err(ConverterError::invalid_structure(path, "a sequence")),
    }
}

/// Child mapping of `node` under `key`, created empty on first use
pub fn child_mapping<'m>(node: &'m mut Mapping, key: &str) -> &'m mut Mapping {
    let slot = node
        .entry(Value::from(key))
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    if !slot.is_mapping() {
        *slot = Value::Mapping(Mapping::new());
    }
    match slot {
        Value::Mapping(mapping) => mapping,
        _ => unreachable!("slot holds a mapping"),
    }
}

/// Child sequence of `node` under `key`, created empty on first use
pub fn child_sequence<'m>(node: &'m mut Mapping, key: &str) -> &'m mut Sequence {
    let slot = node
        .entry(Value::from(key))
        .or_insert_with(|| Value::Sequence(Sequence::new()));
    if !slot.is_sequence() {
        *slot = Value::Sequence(Sequence::new());
    }
    match slot {
        Value::Sequence(sequence) => sequence,
        _ => unreachable!("slot holds a sequence"),
    }
}
