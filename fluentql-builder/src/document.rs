//! Operation document synthesis.

use tracing::trace;

use crate::arguments::ArgumentRenderer;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::field::{Field, Selections};
use crate::format::{Printer, to_camel_case};
use crate::operation::OperationKind;
use crate::parameter::ParameterTable;

/// Walks a selection tree and writes the operation text.
pub(crate) struct DocumentWriter<'a> {
    printer: Printer<'a>,
    parameters: &'a ParameterTable,
    arguments: ArgumentRenderer<'a>,
}

impl<'a> DocumentWriter<'a> {
    pub(crate) fn new(config: &'a RenderConfig, parameters: &'a ParameterTable) -> Self {
        Self {
            printer: Printer::new(config),
            parameters,
            arguments: ArgumentRenderer::new(parameters, config.implicit_variables),
        }
    }

    /// Render a complete operation.
    pub(crate) fn write(mut self, kind: OperationKind, selections: &Selections) -> Result<String> {
        self.printer.push(kind.keyword());
        self.write_declarations()?;

        self.printer.open();
        for field in selections {
            self.write_field(field, true)?;
        }
        self.printer.close();

        Ok(self.printer.finish())
    }

    fn write_declarations(&mut self) -> Result<()> {
        let mut declarations = Vec::with_capacity(self.parameters.len());
        for parameter in self.parameters.iter() {
            if !parameter.has_value() {
                trace!(variable = parameter.name(), "Skipping null variable declaration");
                continue;
            }
            declarations.push(format!(
                "${}: {}",
                to_camel_case(parameter.name()),
                parameter.type_signature()?
            ));
        }

        // No `()` when every parameter is null.
        if !declarations.is_empty() {
            self.printer.push(" (");
            self.printer.push(&declarations.join(", "));
            self.printer.push(")");
        }
        Ok(())
    }

    /// Root fields always carry an argument clause; nested fields only when
    /// arguments are set.
    fn write_field(&mut self, field: &Field, root: bool) -> Result<()> {
        self.printer.line();

        if let Some(alias) = field.alias() {
            self.printer.push(alias);
            self.printer.push(": ");
        }
        self.printer.push(&to_camel_case(field.name()));

        match field.arguments() {
            Some(arguments) => {
                let rendered = self.arguments.render(arguments)?;
                self.printer.push("(");
                self.printer.push(&rendered);
                self.printer.push(")");
            }
            None if root => self.printer.push("()"),
            None => {}
        }

        if !field.is_leaf() {
            self.printer.open();
            for child in field.children() {
                self.write_field(child, false)?;
            }
            self.printer.close();
        }
        Ok(())
    }
}
