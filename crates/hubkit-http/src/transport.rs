//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use hubkit_core::error::{AuthError, TransportError};
use hubkit_core::{AccessToken, Error, Method, Result, Transport, classify};

use crate::config::ClientConfig;

/// HTTP transport attaching the bearer token to every request.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for the given configuration and token.
    ///
    /// # Errors
    ///
    /// Fails if the token cannot be used as a header value or the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig, token: &AccessToken) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| transport_error(e, config.timeout))?;

        Ok(Self {
            client,
            headers: default_headers(token)?,
            timeout: config.timeout,
        })
    }
}

/// Authorization and JSON headers sent with every request.
fn default_headers(token: &AccessToken) -> Result<HeaderMap> {
    let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
        .map_err(|_| AuthError::InvalidToken)?;
    auth_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Map a reqwest failure into the transport error taxonomy.
pub(crate) fn transport_error(err: reqwest::Error, timeout: Duration) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, query, body))]
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<Vec<u8>> {
        debug!(%method, url, "API request");

        let mut request = self
            .client
            .request(to_reqwest(method), url)
            .headers(self.headers.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        trace!(status = %status, "API response");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            let error = classify(status.as_u16(), &bytes);
            debug!(status = error.status, kind = %error.kind, "API error response");
            Err(Error::Api(error))
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.timeout)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_creation() {
        let token = AccessToken::new("pat-test").unwrap();
        let transport = HttpTransport::new(&ClientConfig::hubapi().unwrap(), &token).unwrap();
        assert_eq!(transport.timeout, crate::config::DEFAULT_TIMEOUT);
    }

    #[test]
    fn headers_are_json_and_bearer() {
        let token = AccessToken::new("pat-test").unwrap();
        let headers = default_headers(&token).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer pat-test");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let token = AccessToken::new("bad\ntoken").unwrap();
        let err = default_headers(&token).unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::InvalidToken)));
    }

    #[test]
    fn debug_hides_token() {
        let token = AccessToken::new("pat-secret").unwrap();
        let transport = HttpTransport::new(&ClientConfig::hubapi().unwrap(), &token).unwrap();
        assert!(!format!("{:?}", transport).contains("pat-secret"));
    }
}
