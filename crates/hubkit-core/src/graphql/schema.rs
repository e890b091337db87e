//! Introspected schema model and type-reference resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::response::null_as_empty;

/// Kind of a GraphQL type or type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    /// A kind this client does not know about.
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    /// Returns true for the `NON_NULL` and `LIST` wrapper kinds.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }
}

/// A possibly wrapped reference to a named type.
///
/// Leaf nodes carry `name`; wrapper nodes (`NON_NULL`, `LIST`) carry
/// `of_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// The innermost named type, skipping all wrappers.
    pub fn named_type(&self) -> Option<&str> {
        match (&self.name, &self.of_type) {
            (Some(name), _) => Some(name),
            (None, Some(inner)) => inner.named_type(),
            (None, None) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&type_name(self))
    }
}

/// Render a type reference in SDL notation, e.g. `[Contact]!`.
///
/// A named node renders as its name. A `NON_NULL` wrapper appends `!`, a
/// `LIST` wrapper surrounds its inner name with brackets, and any other
/// wrapper passes the inner name through. A node with neither a name nor
/// an inner type renders as the empty string.
pub fn type_name(type_ref: &TypeRef) -> String {
    if let Some(name) = &type_ref.name {
        return name.clone();
    }

    let Some(inner) = &type_ref.of_type else {
        return String::new();
    };

    let inner = type_name(inner);
    match type_ref.kind {
        TypeKind::NonNull => format!("{}!", inner),
        TypeKind::List => format!("[{}]", inner),
        _ => inner,
    }
}

/// A reference to a root operation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
}

/// An argument or input-object field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

impl Field {
    /// SDL rendering of this field's type.
    pub fn type_name(&self) -> String {
        type_name(&self.type_ref)
    }
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// A named type in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullType {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input_fields: Vec<InputValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enum_values: Vec<EnumValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub possible_types: Vec<TypeRef>,
}

impl FullType {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns true for the `__`-prefixed types of the introspection system.
    pub fn is_introspection(&self) -> bool {
        self.name().starts_with("__")
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// An introspected schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub query_type: Option<NamedType>,
    #[serde(default)]
    pub mutation_type: Option<NamedType>,
    #[serde(default)]
    pub subscription_type: Option<NamedType>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<FullType>,
}

impl Schema {
    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_ref().map(|t| t.name.as_str())
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(|t| t.name.as_str())
    }

    pub fn find_type(&self, name: &str) -> Option<&FullType> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// See [`root_types`].
    pub fn root_types(&self) -> Vec<&FullType> {
        root_types(self)
    }
}

/// Object and interface types that declare at least one field, excluding
/// the introspection system's own types. Schema order is kept.
pub fn root_types(schema: &Schema) -> Vec<&FullType> {
    schema
        .types
        .iter()
        .filter(|t| !t.is_introspection())
        .filter(|t| matches!(t.kind, TypeKind::Object | TypeKind::Interface))
        .filter(|t| !t.fields.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_scalar() {
        let string = TypeRef::named(TypeKind::Scalar, "String");
        assert_eq!(type_name(&string), "String");
    }

    #[test]
    fn non_null_list_of_object() {
        let contact = TypeRef::named(TypeKind::Object, "Contact");
        let type_ref = TypeRef::non_null(TypeRef::list(contact));
        assert_eq!(type_name(&type_ref), "[Contact]!");
    }

    #[test]
    fn deep_nesting() {
        let id = TypeRef::named(TypeKind::Scalar, "ID");
        let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(id)));
        assert_eq!(type_ref.to_string(), "[ID!]!");
        assert_eq!(type_ref.named_type(), Some("ID"));
    }

    #[test]
    fn unknown_wrapper_passes_inner_through() {
        let type_ref = TypeRef {
            kind: TypeKind::Object,
            name: None,
            of_type: Some(Box::new(TypeRef::named(TypeKind::Scalar, "Int"))),
        };
        assert_eq!(type_name(&type_ref), "Int");
    }

    #[test]
    fn malformed_ref_is_empty() {
        let type_ref = TypeRef {
            kind: TypeKind::NonNull,
            name: None,
            of_type: None,
        };
        assert_eq!(type_name(&type_ref), "");
        assert_eq!(type_ref.named_type(), None);
    }

    #[test]
    fn deserializes_wire_type_ref() {
        let type_ref: TypeRef = serde_json::from_value(json!({
            "kind": "NON_NULL",
            "name": null,
            "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {"kind": "OBJECT", "name": "Contact", "ofType": null}
            }
        }))
        .unwrap();
        assert_eq!(type_name(&type_ref), "[Contact]!");
    }

    #[test]
    fn unknown_kind_is_tolerated() {
        let type_ref: TypeRef =
            serde_json::from_value(json!({"kind": "FUTURE_KIND", "name": "X"})).unwrap();
        assert_eq!(type_ref.kind, TypeKind::Unknown);
    }

    fn object(name: &str, fields: &[&str]) -> FullType {
        FullType {
            kind: TypeKind::Object,
            name: Some(name.to_string()),
            description: None,
            fields: fields
                .iter()
                .map(|f| Field {
                    name: f.to_string(),
                    description: None,
                    args: Vec::new(),
                    type_ref: TypeRef::named(TypeKind::Scalar, "String"),
                    is_deprecated: false,
                    deprecation_reason: None,
                })
                .collect(),
            input_fields: Vec::new(),
            interfaces: Vec::new(),
            enum_values: Vec::new(),
            possible_types: Vec::new(),
        }
    }

    #[test]
    fn root_types_filter() {
        let mut scalar = object("String", &[]);
        scalar.kind = TypeKind::Scalar;
        let mut node = object("Node", &["id"]);
        node.kind = TypeKind::Interface;
        let mut input = object("ContactFilter", &["email"]);
        input.kind = TypeKind::InputObject;

        let schema = Schema {
            query_type: Some(NamedType {
                name: "Query".to_string(),
            }),
            mutation_type: None,
            subscription_type: None,
            types: vec![
                object("Query", &["CRM"]),
                object("__Schema", &["types"]),
                scalar,
                object("Empty", &[]),
                node,
                input,
                object("Contact", &["email", "firstname"]),
            ],
        };

        let names: Vec<&str> = schema.root_types().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Query", "Node", "Contact"]);
        assert_eq!(schema.query_type_name(), Some("Query"));
        assert!(schema.find_type("Contact").unwrap().field("email").is_some());
        assert!(schema.find_type("Missing").is_none());
    }
}
