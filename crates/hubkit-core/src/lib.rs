//! hubkit-core - Core types and contracts for a CRM/CMS REST and GraphQL client.
//!
//! This crate holds everything that does not touch the network: the error
//! taxonomy and its status classifier, the resource/record/page model, the
//! property coercion rules, the GraphQL response and introspection model, and
//! the [`Transport`] trait that concrete HTTP clients implement.

pub mod classify;
pub mod credentials;
pub mod error;
pub mod graphql;
pub mod property;
pub mod search;
pub mod tokens;
pub mod traits;
pub mod types;

pub use classify::classify;
pub use credentials::{CredentialSource, EnvToken, StaticToken};
pub use error::{ApiError, ApiErrorKind, Error};
pub use graphql::{GraphqlResponse, Schema, TypeKind, TypeRef};
pub use property::{PropertyMap, PropertyValue};
pub use search::{Filter, FilterGroup, SearchRequest, Sort, SortDirection};
pub use tokens::AccessToken;
pub use traits::{Method, Transport};
pub use types::{ApiFamily, BaseUrl, ListOptions, Page, Record, ResourceType};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
