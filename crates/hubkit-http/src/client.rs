//! Top-level client bundling the REST and GraphQL clients.

use hubkit_core::{ApiFamily, BaseUrl, CredentialSource, Result};
use tracing::debug;

use crate::config::ClientConfig;
use crate::graphql::GraphqlClient;
use crate::resources::ResourceClient;
use crate::transport::HttpTransport;

/// Entry point holding one authenticated transport.
///
/// The token is read from the credential source once, at construction.
/// Clients handed out share the transport's connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    transport: HttpTransport,
    base: BaseUrl,
}

impl Client {
    /// Create a client, reading the token from `credentials`.
    ///
    /// # Errors
    ///
    /// Fails with a missing-credentials error if the source has no token.
    pub fn new(config: ClientConfig, credentials: &dyn CredentialSource) -> Result<Self> {
        let token = credentials.access_token()?;
        let transport = HttpTransport::new(&config, &token)?;
        debug!(base = %config.base_url, "Client created");

        Ok(Self {
            transport,
            base: config.base_url,
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// Resource client for CRM v3.
    pub fn resources(&self) -> ResourceClient {
        ResourceClient::new(self.transport.clone(), self.base.clone())
    }

    /// Resource client for another API family.
    pub fn resources_in(&self, family: ApiFamily) -> ResourceClient {
        self.resources().with_family(family)
    }

    pub fn graphql(&self) -> GraphqlClient {
        GraphqlClient::new(self.transport.clone(), &self.base)
    }
}
