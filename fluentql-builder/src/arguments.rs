//! Inline argument rendering.

use tracing::trace;

use crate::error::{BuilderError, Result};
use crate::format::{quote, to_camel_case};
use crate::parameter::ParameterTable;
use crate::value::{ArgValue, ObjectValue};

/// Whether a key names a logical combinator (`and` / `or`, any casing).
fn is_logical(key: &str) -> bool {
    key.eq_ignore_ascii_case("and") || key.eq_ignore_ascii_case("or")
}

/// Where a value sits while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Directly inside a field's argument parentheses.
    Root,
    /// Inside an object or list literal.
    Nested,
}

/// Renders argument value graphs to GraphQL argument syntax.
pub(crate) struct ArgumentRenderer<'a> {
    parameters: &'a ParameterTable,
    implicit_variables: bool,
}

impl<'a> ArgumentRenderer<'a> {
    pub(crate) fn new(parameters: &'a ParameterTable, implicit_variables: bool) -> Self {
        Self {
            parameters,
            implicit_variables,
        }
    }

    /// Render the contents of a field's argument clause, without parentheses.
    pub(crate) fn render(&self, arguments: &ObjectValue) -> Result<String> {
        self.entries(arguments, Context::Root)
    }

    fn entries(&self, object: &ObjectValue, context: Context) -> Result<String> {
        let mut rendered = Vec::with_capacity(object.len());
        for (key, value) in object {
            if let Some(entry) = self.entry(key, value)? {
                rendered.push(entry);
            }
        }

        let body = rendered.join(", ");
        Ok(match context {
            Context::Root => body,
            Context::Nested if body.is_empty() => "{}".to_string(),
            Context::Nested => format!("{{ {} }}", body),
        })
    }

    /// `key: value`, or `None` when the value is dropped.
    fn entry(&self, key: &str, value: &ArgValue) -> Result<Option<String>> {
        if is_logical(key) {
            let rendered = match value {
                ArgValue::List(items) => self.list(items)?,
                ArgValue::Object(object) => format!("[ {} ]", self.entries(object, Context::Nested)?),
                other => match self.value(other)? {
                    Some(rendered) => rendered,
                    None => return Ok(None),
                },
            };
            return Ok(Some(format!("{}: {}", key.to_lowercase(), rendered)));
        }

        Ok(self
            .value(value)?
            .map(|rendered| format!("{}: {}", to_camel_case(key), rendered)))
    }

    fn list(&self, items: &[ArgValue]) -> Result<String> {
        let mut rendered = Vec::with_capacity(items.len());
        for item in items {
            if let Some(item) = self.value(item)? {
                rendered.push(item);
            }
        }

        if rendered.is_empty() {
            return Ok("[]".to_string());
        }
        Ok(format!("[ {} ]", rendered.join(", ")))
    }

    /// Render a single value, `None` when it refers to a variable with no value.
    fn value(&self, value: &ArgValue) -> Result<Option<String>> {
        let rendered = match value {
            ArgValue::Null => "null".to_string(),
            ArgValue::Bool(b) => b.to_string(),
            ArgValue::Number(n) => n.to_string(),
            ArgValue::Enum(e) => e.clone(),
            ArgValue::Str(s) if self.implicit_variables && self.parameters.contains(s) => {
                return Ok(self.reference(s));
            }
            ArgValue::Str(s) => quote(s)?,
            ArgValue::VarRef(name) => {
                if !self.parameters.contains(name) {
                    return Err(BuilderError::UndeclaredVariable(name.clone()));
                }
                return Ok(self.reference(name));
            }
            ArgValue::Object(object) => self.entries(object, Context::Nested)?,
            ArgValue::List(items) => self.list(items)?,
        };
        Ok(Some(rendered))
    }

    fn reference(&self, name: &str) -> Option<String> {
        match self.parameters.get(name) {
            Some(parameter) if parameter.has_value() => Some(format!("${}", to_camel_case(name))),
            _ => {
                trace!(variable = name, "Dropping argument bound to a null variable");
                None
            }
        }
    }
}
