//! Client configuration.

use std::time::Duration;

use hubkit_core::{BaseUrl, Result};

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by the REST and GraphQL clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub base_url: BaseUrl,
    /// Overall budget for one request/response exchange.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("hubkit/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Configuration for the public API with default settings.
    pub fn hubapi() -> Result<Self> {
        Ok(Self::new(BaseUrl::hubapi()?))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
