//! hubkit-http - HTTP clients for the CRM/CMS REST and GraphQL APIs.
//!
//! # Example
//!
//! ```no_run
//! use hubkit_core::{EnvToken, ListOptions, ResourceType};
//! use hubkit_http::{Client, ClientConfig};
//!
//! # async fn example() -> Result<(), hubkit_core::Error> {
//! let client = Client::new(ClientConfig::hubapi()?, &EnvToken::default())?;
//!
//! let contacts = ResourceType::new("contacts")?;
//! let page = client
//!     .resources()
//!     .list(&contacts, &ListOptions::new().limit(10).properties(["email"]))
//!     .await?;
//!
//! for record in &page.results {
//!     println!("{}: {}", record.id, record.property_string("email"));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod graphql;
mod paginator;
mod resources;
mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use graphql::{GRAPHQL_PATH, GraphqlClient};
pub use paginator::Paginator;
pub use resources::ResourceClient;
pub use transport::HttpTransport;
