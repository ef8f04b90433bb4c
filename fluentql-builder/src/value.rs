//! Argument value graph.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::error::{BuilderError, Result};

/// A value passed as a field argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Integer or float, always rendered with a `.` decimal separator.
    Number(Number),
    /// Quoted string literal.
    Str(String),
    /// Enum value, rendered verbatim (`ASC`).
    Enum(String),
    /// Reference to a declared variable, rendered `$name`.
    VarRef(String),
    /// Object literal.
    Object(ObjectValue),
    /// List literal.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Reference a declared variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::VarRef(name.into())
    }

    /// An enum value.
    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(value.into())
    }

    /// Build a list from anything convertible into argument values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ArgValue>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Check if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<f32> for ArgValue {
    /// Goes through the shortest decimal form so `1.1_f32` stays `1.1`.
    fn from(value: f32) -> Self {
        value
            .to_string()
            .parse::<f64>()
            .map_or(Self::Null, Self::from)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<ObjectValue> for ArgValue {
    fn from(value: ObjectValue) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::list(items),
            Value::Object(map) => Self::Object(ObjectValue(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            )),
        }
    }
}

/// Ordered property bag rendered as `{ key: value, ... }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue(IndexMap<String, ArgValue>);

impl ObjectValue {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, replacing any previous value under the same key.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a property in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a property by key.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ArgValue> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a ObjectValue {
    type Item = (&'a String, &'a ArgValue);
    type IntoIter = indexmap::map::Iter<'a, String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Value> for ObjectValue {
    type Error = BuilderError;

    fn try_from(value: Value) -> Result<Self> {
        match ArgValue::from(value) {
            ArgValue::Object(object) => Ok(object),
            other => Err(BuilderError::InvalidArguments(format!(
                "expected an object, got {:?}",
                other
            ))),
        }
    }
}
