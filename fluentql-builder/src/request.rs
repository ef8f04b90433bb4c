//! Transport-neutral request envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BuilderError, Result};

/// GraphQL request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    /// The GraphQL query or mutation.
    pub query: String,
    /// Operation name (for documents with multiple operations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Variables for the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
    /// Extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLRequest {
    /// Create a new request. Fails if the query text is blank.
    pub fn new(query: impl Into<String>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(BuilderError::InvalidRequest(
                "query text must not be empty".to_string(),
            ));
        }

        Ok(Self {
            query,
            operation_name: None,
            variables: None,
            extensions: None,
        })
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Set variables. An empty map clears them.
    pub fn variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = (!variables.is_empty()).then_some(variables);
        self
    }

    /// Set extensions.
    pub fn extensions(mut self, extensions: Value) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Serialize to the JSON body expected by GraphQL servers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
