//! Transport trait.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// HTTP method used by client operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single authenticated request/response exchange.
///
/// Implementations attach the bearer token and JSON headers, send `body` as
/// JSON when present, and return the raw 2xx body unchanged (empty for 204).
/// Non-2xx responses are returned as [`crate::Error::Api`] built by
/// [`crate::classify`]. No retries are performed.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request against an absolute URL.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<Vec<u8>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<Vec<u8>> {
        (**self).execute(method, url, query, body).await
    }
}
