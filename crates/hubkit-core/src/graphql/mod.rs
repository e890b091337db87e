//! GraphQL request/response and schema introspection model.

mod introspection;
mod response;
mod schema;

pub use introspection::{INTROSPECTION_QUERY, IntrospectionData};
pub use response::{GraphqlError, GraphqlRequest, GraphqlResponse, Location, PathSegment};
pub use schema::{
    EnumValue, Field, FullType, InputValue, NamedType, Schema, TypeKind, TypeRef, root_types,
    type_name,
};
