//! Field selection tree.

use indexmap::IndexMap;

use crate::value::ObjectValue;

/// Types that know the scalar fields GraphQL exposes for them.
///
/// ```
/// use fluentql_builder::{Field, Selectable};
///
/// struct Account;
///
/// impl Selectable for Account {
///     const FIELDS: &'static [&'static str] = &["Id", "SocietyName"];
/// }
///
/// let field = Field::new("accounts").all_fields::<Account>();
/// assert_eq!(field.children().len(), 2);
/// ```
pub trait Selectable {
    /// Scalar field names, in selection order.
    const FIELDS: &'static [&'static str];
}

/// Ordered set of sibling fields, unique by principal key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selections(IndexMap<String, Field>);

impl Selections {
    /// Create an empty selection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field under its principal key.
    ///
    /// An existing field with the same key is replaced in place; a new key is appended.
    pub fn insert(&mut self, field: Field) {
        self.0.insert(field.principal_key().to_string(), field);
    }

    /// Remove a field by principal key, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Field> {
        self.0.shift_remove(key)
    }

    /// Get a field by principal key.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.0.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Field> {
        self.0.values()
    }
}

impl<'a> IntoIterator for &'a Selections {
    type Item = &'a Field;
    type IntoIter = indexmap::map::Values<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

/// A selected field, optionally aliased, with arguments and child selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    alias: Option<String>,
    arguments: Option<ObjectValue>,
    children: Selections,
}

impl Field {
    /// Create a field with no alias, arguments or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: None,
            children: Selections::new(),
        }
    }

    /// Set the alias. Blank aliases are ignored.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.trim().is_empty()).then_some(alias);
        self
    }

    /// Set the arguments.
    pub fn with_arguments(mut self, arguments: ObjectValue) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Add a child field.
    pub fn field(mut self, field: Field) -> Self {
        self.children.insert(field);
        self
    }

    /// Add scalar child fields by name.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.children.insert(Field::new(name));
        }
        self
    }

    /// Add every scalar field declared by `T`.
    pub fn all_fields<T: Selectable>(self) -> Self {
        self.fields(T::FIELDS.iter().copied())
    }

    /// Remove a child field by principal key.
    pub fn except(mut self, key: &str) -> Self {
        self.children.remove(key);
        self
    }

    /// Field name as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Check if the field is aliased.
    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// Alias if present, else name.
    pub fn principal_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Arguments, if any.
    pub fn arguments(&self) -> Option<&ObjectValue> {
        self.arguments.as_ref()
    }

    /// Child selections in insertion order.
    pub fn children(&self) -> &Selections {
        &self.children
    }

    /// Check if this field has no child selections.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contact;

    impl Selectable for Contact {
        const FIELDS: &'static [&'static str] =
            &["Id", "FirstName", "LastName", "Email", "PhoneNumber"];
    }

    fn keys(field: &Field) -> Vec<&str> {
        field.children().iter().map(Field::principal_key).collect()
    }

    #[test]
    fn test_principal_key() {
        let field = Field::new("accounts");
        assert_eq!(field.principal_key(), "accounts");
        assert!(!field.has_alias());

        let field = field.with_alias("mine");
        assert_eq!(field.principal_key(), "mine");
        assert_eq!(field.name(), "accounts");
    }

    #[test]
    fn test_blank_alias_ignored() {
        let field = Field::new("accounts").with_alias("  ");
        assert!(!field.has_alias());
        assert_eq!(field.principal_key(), "accounts");
    }

    #[test]
    fn test_insert_new_appends() {
        let field = Field::new("accounts").fields(["id", "societyName"]);
        assert_eq!(keys(&field), vec!["id", "societyName"]);
    }

    #[test]
    fn test_overwrite_existing_keeps_position() {
        let field = Field::new("accounts")
            .fields(["id", "contacts", "societyName"])
            .field(Field::new("contacts").fields(["email"]));

        assert_eq!(keys(&field), vec!["id", "contacts", "societyName"]);
        let contacts = field.children().get("contacts").unwrap();
        assert!(!contacts.is_leaf());
    }

    #[test]
    fn test_alias_makes_distinct_sibling() {
        let field = Field::new("accounts")
            .field(Field::new("email"))
            .field(Field::new("email").with_alias("mail"));

        assert_eq!(keys(&field), vec!["email", "mail"]);
    }

    #[test]
    fn test_all_fields_and_except() {
        let field = Field::new("contacts")
            .all_fields::<Contact>()
            .except("PhoneNumber");

        assert_eq!(keys(&field), vec!["Id", "FirstName", "LastName", "Email"]);
    }
}
