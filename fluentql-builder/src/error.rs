//! Builder error types.

use thiserror::Error;

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors raised while building or rendering a GraphQL operation.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A request envelope was built from unusable input.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A declared parameter type has no known GraphQL type signature.
    #[error("Unsupported parameter type: {0}")]
    UnsupportedType(String),

    /// A variable reference names a parameter that was never declared.
    #[error("Undeclared variable: ${0}")]
    UndeclaredVariable(String),

    /// Field arguments were not an object.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuilderError {
    /// Check if this error comes from an unsupported parameter type.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    /// Check if this error points to caller misuse while constructing values.
    pub fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::InvalidArguments(_))
    }

    /// Check if this is an undeclared variable reference.
    pub fn is_undeclared_variable(&self) -> bool {
        matches!(self, Self::UndeclaredVariable(_))
    }
}
