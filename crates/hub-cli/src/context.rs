//! Client construction from global arguments.

use std::time::Duration;

use anyhow::{Context as _, Result};
use tracing::debug;

use hubkit_core::{BaseUrl, CredentialSource, EnvToken, StaticToken};
use hubkit_http::{Client, ClientConfig};

use crate::cli::GlobalArgs;

/// Build an authenticated client from the global arguments.
pub fn client(global: &GlobalArgs) -> Result<Client> {
    let base_url = BaseUrl::new(&global.base_url).context("Invalid base URL")?;

    let config = ClientConfig::new(base_url)
        .with_timeout(Duration::from_secs(global.timeout_secs))
        .with_user_agent(concat!("hub-cli/", env!("HUB_VERSION")));

    let credentials: Box<dyn CredentialSource> = match &global.token {
        Some(token) => Box::new(StaticToken::new(token)),
        None => Box::new(EnvToken::default()),
    };

    debug!(
        base_url = %config.base_url,
        credentials = %credentials.describe(),
        "Creating client"
    );
    Client::new(config, credentials.as_ref()).context("Failed to create API client")
}
