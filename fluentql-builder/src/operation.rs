//! Operation builder, the render root.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::RenderConfig;
use crate::document::DocumentWriter;
use crate::error::Result;
use crate::field::{Field, Selections};
use crate::parameter::{Parameter, ParameterTable};
use crate::request::GraphQLRequest;

/// Kind of GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationKind {
    /// `query`
    #[default]
    Query,
    /// `mutation`
    Mutation,
}

impl OperationKind {
    /// Document keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// A query or mutation under construction.
///
/// ```
/// use fluentql_builder::{ArgValue, Field, ObjectValue, Operation, Parameter};
///
/// let operation = Operation::query()
///     .variable(Parameter::string("firstName", "Paul"))
///     .selection(
///         Field::new("accounts")
///             .with_arguments(ObjectValue::new().arg(
///                 "where",
///                 ObjectValue::new().arg("firstName", ObjectValue::new().arg("eq", ArgValue::var("firstName"))),
///             ))
///             .fields(["id"]),
///     );
///
/// assert_eq!(
///     operation.build().unwrap(),
///     "query ($firstName: String!) { accounts(where: { firstName: { eq: $firstName } }) { id } }"
/// );
/// assert_eq!(operation.variables()["firstName"], "Paul");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Operation {
    kind: OperationKind,
    selections: Selections,
    parameters: ParameterTable,
    config: RenderConfig,
}

impl Operation {
    /// Create an empty operation.
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create an empty query.
    pub fn query() -> Self {
        Self::new(OperationKind::Query)
    }

    /// Create an empty mutation.
    pub fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    /// Set the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Declare a variable. A duplicate name replaces the earlier declaration.
    pub fn variable(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(parameter);
        self
    }

    /// Declare several variables.
    pub fn variables_from(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        for parameter in parameters {
            self.parameters.insert(parameter);
        }
        self
    }

    /// Add a root selection. A selection with the same principal key is replaced in place.
    pub fn selection(mut self, field: Field) -> Self {
        self.selections.insert(field);
        self
    }

    /// Operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Root selections in insertion order.
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Declared variables.
    pub fn parameters(&self) -> &ParameterTable {
        &self.parameters
    }

    /// Render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the operation text.
    pub fn build(&self) -> Result<String> {
        let document = DocumentWriter::new(&self.config, &self.parameters)
            .write(self.kind, &self.selections)?;

        debug!(
            kind = self.kind.keyword(),
            selections = self.selections.len(),
            variables = self.parameters.len(),
            length = document.len(),
            "Rendered GraphQL operation"
        );
        Ok(document)
    }

    /// Variables payload for the operation.
    pub fn variables(&self) -> Map<String, Value> {
        self.parameters.to_variables()
    }

    /// Assemble the request envelope: rendered text plus variables.
    pub fn request(&self) -> Result<GraphQLRequest> {
        let request = GraphQLRequest::new(self.build()?)?.variables(self.variables());
        debug!(
            has_variables = request.variables.is_some(),
            "Assembled GraphQL request"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ArgValue, ObjectValue};

    #[test]
    fn test_keyword() {
        assert_eq!(OperationKind::Query.keyword(), "query");
        assert_eq!(OperationKind::Mutation.keyword(), "mutation");
        assert_eq!(Operation::default().kind(), OperationKind::Query);
    }

    #[test]
    fn test_two_root_selections() {
        let operation = Operation::query()
            .selection(Field::new("accounts").fields(["id", "societyName"]))
            .selection(Field::new("contacts").fields(["id", "email"]));

        assert_eq!(
            operation.build().unwrap(),
            "query { accounts() { id societyName } contacts() { id email } }"
        );
    }

    #[test]
    fn test_root_overwrite_keeps_position() {
        let operation = Operation::query()
            .selection(Field::new("accounts").fields(["id"]))
            .selection(Field::new("contacts").fields(["id"]))
            .selection(Field::new("accounts").fields(["societyName"]));

        assert_eq!(operation.selections().len(), 2);
        assert_eq!(
            operation.build().unwrap(),
            "query { accounts() { societyName } contacts() { id } }"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let operation = Operation::query()
            .variable(Parameter::int("first", 3))
            .selection(
                Field::new("accounts")
                    .with_arguments(ObjectValue::new().arg("first", ArgValue::var("first")))
                    .fields(["id"]),
            );

        assert_eq!(operation.build().unwrap(), operation.build().unwrap());
        assert_eq!(operation.variables(), operation.variables());
    }

    #[test]
    fn test_request_without_variables() {
        let request = Operation::query()
            .selection(Field::new("accounts").fields(["id"]))
            .request()
            .unwrap();

        assert_eq!(request.query, "query { accounts() { id } }");
        assert!(request.variables.is_none());
    }

    #[test]
    fn test_request_propagates_render_errors() {
        let err = Operation::query()
            .selection(
                Field::new("accounts")
                    .with_arguments(ObjectValue::new().arg("id", ArgValue::var("id")))
                    .fields(["id"]),
            )
            .request()
            .unwrap_err();

        assert!(err.is_undeclared_variable());
    }
}
