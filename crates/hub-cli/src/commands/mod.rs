//! Command implementations.

pub mod graphql;
pub mod objects;
