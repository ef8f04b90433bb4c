// FluentQL - A fluent GraphQL operation builder for Rust
//
// This library renders GraphQL queries and mutations from a field selection
// tree and a table of typed variables.

// Re-export builder functionality
pub use fluentql_builder::*;

// Re-export serialization crates used for variable values
pub use serde;
pub use serde_json;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ArgValue,
        BuilderError,
        Field,
        GraphQLRequest,
        ObjectValue,
        Operation,
        OperationKind,
        Parameter,
        ParameterType,
        RenderConfig,
        RenderStyle,
        Result,
        Selectable,
    };
}
