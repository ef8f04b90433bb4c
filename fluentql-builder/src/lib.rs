//! # FluentQL Builder
//!
//! Programmatic construction of GraphQL queries and mutations: build a field
//! selection tree, declare typed variables, then render the operation text and
//! the matching variables payload.
//!
//! ## Features
//!
//! - **Ordered selections**: fields render in insertion order; re-adding a field
//!   replaces it in place
//! - **Typed variables**: declarations like `$first: Int!` generated from the
//!   parameter table
//! - **Argument graphs**: nested objects, lists, enums and variable references
//!   rendered inline
//! - **Logical filters**: `and` / `or` keys always render as lists of objects
//! - **Transport neutral**: produces a serializable [`GraphQLRequest`], no HTTP client
//!
//! ## Quick Start
//!
//! ```rust
//! use fluentql_builder::{ArgValue, Field, ObjectValue, Operation, Parameter};
//!
//! let operation = Operation::query()
//!     .variable(Parameter::string_array("cities", ["Paris", "London"]))
//!     .selection(
//!         Field::new("accounts")
//!             .with_arguments(ObjectValue::new().arg(
//!                 "where",
//!                 ObjectValue::new().arg("city", ObjectValue::new().arg("in", ArgValue::var("cities"))),
//!             ))
//!             .fields(["id", "societyName"]),
//!     );
//!
//! let request = operation.request().unwrap();
//! assert_eq!(
//!     request.query,
//!     "query ($cities: [String]!) { accounts(where: { city: { in: $cities } }) { id societyName } }"
//! );
//! ```

mod arguments;
mod config;
mod document;
mod error;
mod field;
mod format;
mod operation;
mod parameter;
mod request;
mod value;
mod variables;

pub use config::{RenderConfig, RenderConfigBuilder, RenderStyle};
pub use error::{BuilderError, Result};
pub use field::{Field, Selectable, Selections};
pub use format::to_camel_case;
pub use operation::{Operation, OperationKind};
pub use parameter::{Parameter, ParameterTable, ParameterType};
pub use request::GraphQLRequest;
pub use value::{ArgValue, ObjectValue};

// Re-export common types
pub use serde_json::Value as JsonValue;

#[cfg(feature = "chrono")]
pub use chrono;

#[cfg(feature = "uuid")]
pub use uuid;
