//! Operation variables.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BuilderError, Result};
use crate::format::to_camel_case;

/// Declared type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// `Int!`
    Int,
    /// `String!`
    String,
    /// `DateTime!`
    DateTime,
    /// `Boolean!`
    Boolean,
    /// `UUID!`
    Uuid,
    /// Named input type, taken from the bound value's type.
    Object,
    /// `[String]!`
    StringArray,
    /// `[Int!]!`
    IntArray,
    /// `[DateTime]!`
    DateTimeArray,
}

impl ParameterType {
    /// Tag used when declaring types from text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::String => "STRING",
            Self::DateTime => "DATETIME",
            Self::Boolean => "BOOLEAN",
            Self::Uuid => "UUID",
            Self::Object => "OBJECT",
            Self::StringArray => "STRING_ARRAY",
            Self::IntArray => "INT_ARRAY",
            Self::DateTimeArray => "DATETIME_ARRAY",
        }
    }

    /// Fixed GraphQL signature, `None` for [`ParameterType::Object`].
    pub fn signature(&self) -> Option<&'static str> {
        match self {
            Self::Int => Some("Int!"),
            Self::String => Some("String!"),
            Self::DateTime => Some("DateTime!"),
            Self::Boolean => Some("Boolean!"),
            Self::Uuid => Some("UUID!"),
            Self::StringArray => Some("[String]!"),
            Self::IntArray => Some("[Int!]!"),
            Self::DateTimeArray => Some("[DateTime]!"),
            Self::Object => None,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "INT" => Ok(Self::Int),
            "STRING" => Ok(Self::String),
            "DATETIME" => Ok(Self::DateTime),
            "BOOLEAN" => Ok(Self::Boolean),
            "UUID" => Ok(Self::Uuid),
            "OBJECT" => Ok(Self::Object),
            "STRING_ARRAY" => Ok(Self::StringArray),
            "INT_ARRAY" => Ok(Self::IntArray),
            "DATETIME_ARRAY" => Ok(Self::DateTimeArray),
            _ => Err(BuilderError::UnsupportedType(s.to_string())),
        }
    }
}

/// A declared variable and its bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    kind: ParameterType,
    value: Value,
    type_name: Option<String>,
}

impl Parameter {
    /// Declare a variable from any serializable value.
    pub fn new(name: impl Into<String>, kind: ParameterType, value: impl Serialize) -> Result<Self> {
        Ok(Self::bound(name, kind, serde_json::to_value(value)?))
    }

    fn bound(name: impl Into<String>, kind: ParameterType, value: Value) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            type_name: None,
        }
    }

    /// Declare a variable with no value. It is left out of the header and payload.
    pub fn null(name: impl Into<String>, kind: ParameterType) -> Self {
        Self::bound(name, kind, Value::Null)
    }

    /// `Int!` variable.
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self::bound(name, ParameterType::Int, Value::from(value))
    }

    /// `String!` variable.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::bound(name, ParameterType::String, Value::String(value.into()))
    }

    /// `Boolean!` variable.
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::bound(name, ParameterType::Boolean, Value::Bool(value))
    }

    /// `[String]!` variable.
    pub fn string_array<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(|s| Value::String(s.into())).collect();
        Self::bound(name, ParameterType::StringArray, Value::Array(values))
    }

    /// `[Int!]!` variable.
    pub fn int_array(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        let values = values.into_iter().map(Value::from).collect();
        Self::bound(name, ParameterType::IntArray, Value::Array(values))
    }

    /// `DateTime!` variable, bound as an RFC 3339 string.
    #[cfg(feature = "chrono")]
    pub fn datetime(name: impl Into<String>, value: chrono::DateTime<chrono::Utc>) -> Self {
        Self::bound(name, ParameterType::DateTime, datetime_value(&value))
    }

    /// `[DateTime]!` variable.
    #[cfg(feature = "chrono")]
    pub fn datetime_array(
        name: impl Into<String>,
        values: impl IntoIterator<Item = chrono::DateTime<chrono::Utc>>,
    ) -> Self {
        let values = values.into_iter().map(|dt| datetime_value(&dt)).collect();
        Self::bound(name, ParameterType::DateTimeArray, Value::Array(values))
    }

    /// `UUID!` variable, bound in hyphenated form.
    #[cfg(feature = "uuid")]
    pub fn uuid(name: impl Into<String>, value: uuid::Uuid) -> Self {
        Self::bound(name, ParameterType::Uuid, Value::String(value.to_string()))
    }

    /// Input object variable typed after the Rust type of `value`.
    pub fn object<T: Serialize>(name: impl Into<String>, value: &T) -> Result<Self> {
        let type_name = short_type_name(std::any::type_name::<T>());
        Self::object_as(name, type_name, value)
    }

    /// Input object variable with an explicit GraphQL type name.
    pub fn object_as(
        name: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self> {
        let mut parameter = Self::new(name, ParameterType::Object, value)?;
        let type_name = type_name.into();
        parameter.type_name = (!type_name.trim().is_empty()).then_some(type_name);
        Ok(parameter)
    }

    /// Variable name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type.
    pub fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Check if a value is bound.
    pub fn has_value(&self) -> bool {
        !self.value.is_null()
    }

    /// GraphQL type used in the variable declaration.
    pub fn type_signature(&self) -> Result<Cow<'_, str>> {
        if let Some(signature) = self.kind.signature() {
            return Ok(Cow::Borrowed(signature));
        }
        self.type_name
            .as_deref()
            .map(Cow::Borrowed)
            .ok_or_else(|| {
                BuilderError::UnsupportedType(format!(
                    "{} variable `{}` has no type name",
                    self.kind, self.name
                ))
            })
    }
}

#[cfg(feature = "chrono")]
fn datetime_value(value: &chrono::DateTime<chrono::Utc>) -> Value {
    Value::String(value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
}

/// Strip the module path and generic arguments from a Rust type name.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Declared variables in declaration order, unique by camelCased name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTable(IndexMap<String, Parameter>);

impl ParameterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable. A name that camelCases to an existing one replaces it in place.
    pub fn insert(&mut self, parameter: Parameter) {
        self.0.insert(to_camel_case(&parameter.name), parameter);
    }

    /// Get a variable by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.get(&to_camel_case(name))
    }

    /// Check if a variable is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&to_camel_case(name))
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no variable is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate variables in declaration order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Parameter> {
        self.0.values()
    }

    /// Iterate variables that have a bound value.
    pub fn bound(&self) -> impl Iterator<Item = &Parameter> {
        self.0.values().filter(|p| p.has_value())
    }
}

impl FromIterator<Parameter> for ParameterTable {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut table = Self::new();
        for parameter in iter {
            table.insert(parameter);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SaveAccountInput {
        society_name: String,
    }

    #[test]
    fn test_fixed_signatures() {
        assert_eq!(Parameter::int("n", 1).type_signature().unwrap(), "Int!");
        assert_eq!(Parameter::string("s", "x").type_signature().unwrap(), "String!");
        assert_eq!(Parameter::boolean("b", true).type_signature().unwrap(), "Boolean!");
        assert_eq!(
            Parameter::string_array("c", ["a"]).type_signature().unwrap(),
            "[String]!"
        );
        assert_eq!(Parameter::int_array("i", [1, 2]).type_signature().unwrap(), "[Int!]!");
        assert_eq!(ParameterType::DateTimeArray.signature(), Some("[DateTime]!"));
        assert_eq!(ParameterType::Uuid.signature(), Some("UUID!"));
        assert_eq!(ParameterType::Object.signature(), None);
    }

    #[test]
    fn test_object_signature_uses_type_name() {
        let input = SaveAccountInput {
            society_name: "Acme".to_string(),
        };
        let parameter = Parameter::object("input", &input).unwrap();
        assert_eq!(parameter.type_signature().unwrap(), "SaveAccountInput");
        assert_eq!(parameter.value()["society_name"], "Acme");
    }

    #[test]
    fn test_object_without_type_name_is_unsupported() {
        let parameter = Parameter::new("input", ParameterType::Object, serde_json::json!({})).unwrap();
        let err = parameter.type_signature().unwrap_err();
        assert!(err.is_unsupported_type());
    }

    #[test]
    fn test_parse_type_tags() {
        assert_eq!("string_array".parse::<ParameterType>().unwrap(), ParameterType::StringArray);
        assert_eq!("UUID".parse::<ParameterType>().unwrap(), ParameterType::Uuid);
        assert!("FLOAT".parse::<ParameterType>().unwrap_err().is_unsupported_type());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("app::inputs::SaveAccountInput"), "SaveAccountInput");
        assert_eq!(short_type_name("alloc::vec::Vec<app::Input>"), "Vec");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_duplicate_name_last_write_wins_in_place() {
        let mut table = ParameterTable::new();
        table.insert(Parameter::string("first", "a"));
        table.insert(Parameter::int("second", 2));
        table.insert(Parameter::string("first", "b"));

        let names: Vec<_> = table.iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(table.get("first").unwrap().value(), "b");
    }

    #[test]
    fn test_names_differing_in_first_letter_case_collide() {
        let mut table = ParameterTable::new();
        table.insert(Parameter::string("FirstName", "A"));
        table.insert(Parameter::int("limit", 5));
        table.insert(Parameter::string("firstName", "B"));

        assert_eq!(table.len(), 2);
        let names: Vec<_> = table.iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["firstName", "limit"]);
        assert_eq!(table.get("FirstName").unwrap().value(), "B");
        assert!(table.contains("firstName"));
    }

    #[test]
    fn test_bound_skips_null() {
        let table: ParameterTable = [
            Parameter::string("name", "Paul"),
            Parameter::null("city", ParameterType::String),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        let bound: Vec<_> = table.bound().map(Parameter::name).collect();
        assert_eq!(bound, vec!["name"]);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_datetime_value() {
        use chrono::TimeZone;

        let dt = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let parameter = Parameter::datetime("since", dt);
        assert_eq!(parameter.value(), "2024-03-01T12:30:00Z");
        assert_eq!(parameter.type_signature().unwrap(), "DateTime!");
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_value() {
        let id = uuid::Uuid::nil();
        let parameter = Parameter::uuid("id", id);
        assert_eq!(parameter.value(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(parameter.type_signature().unwrap(), "UUID!");
    }
}
