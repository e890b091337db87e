//! Error types for hubkit operations.
//!
//! This module provides a unified error type with explicit variants for
//! local validation, credentials, classified API failures, transport
//! failures and GraphQL introspection failures.
//!
//! Classified API failures carry a closed [`ApiErrorKind`] next to the
//! upstream message, so callers check the kind with the `is_*` predicates
//! instead of matching on message text. The predicates look through
//! [`Error::Context`] wrapping and, in their free-function form, through any
//! `std::error::Error` source chain (including `anyhow` contexts).

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// The unified error type for hubkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Local validation errors, raised before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Credential errors (missing or unusable access token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A non-2xx response classified by status code.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// GraphQL failures that are promoted to call failures.
    #[error("GraphQL error: {0}")]
    Graphql(#[from] GraphqlFailure),

    /// A 2xx response body that could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Another error wrapped with a human-readable message.
    #[error("{message}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with an additional message, keeping its kind reachable.
    pub fn context(self, message: impl Into<String>) -> Self {
        Error::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Returns the classified API error, looking through context wrappers.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            Error::Context { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// Returns the kind of the classified API error, if any.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(|err| err.kind)
    }

    /// Returns true if this is a local validation error.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::InvalidInput(_) => true,
            Error::Context { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::BadRequest)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::Unauthorized)
    }

    pub fn is_forbidden(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::Forbidden)
    }

    pub fn is_not_found(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::NotFound)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::RateLimited)
    }

    pub fn is_server_error(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::ServerError)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A required argument was empty or missing.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

impl InvalidInputError {
    pub fn required(field: &'static str) -> Self {
        InvalidInputError::Required { field }
    }
}

/// Credential errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credential source had no token to offer.
    #[error("no access token available from {source_name}")]
    MissingCredentials { source_name: String },

    /// The token cannot be sent as an HTTP header value.
    #[error("access token contains characters not allowed in a header")]
    InvalidToken,
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Request body could not be serialized.
    #[error("failed to encode request body: {message}")]
    Encode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// GraphQL failures that become call failures.
#[derive(Debug, Error)]
pub enum GraphqlFailure {
    /// The introspection query itself returned GraphQL errors.
    #[error("schema introspection failed: {messages}")]
    Introspection { messages: String },

    /// The response carried neither data nor errors where data was required.
    #[error("response contained no data")]
    MissingData,
}

/// The closed set of classified API failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    /// Any other status at or above 400.
    Other,
}

impl ApiErrorKind {
    /// Map an HTTP status code to its kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            429 => ApiErrorKind::RateLimited,
            500..=599 => ApiErrorKind::ServerError,
            _ => ApiErrorKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::BadRequest => "bad request",
            ApiErrorKind::Unauthorized => "unauthorized",
            ApiErrorKind::Forbidden => "forbidden",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::RateLimited => "rate limited",
            ApiErrorKind::ServerError => "server error",
            ApiErrorKind::Other => "unexpected status",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified error response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Classified kind.
    pub kind: ApiErrorKind,
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server (if present).
    pub message: Option<String>,
    /// Server-side error category (if present).
    pub error_type: Option<String>,
    /// Correlation identifier for support escalation (if present).
    pub correlation_id: Option<String>,
}

impl ApiError {
    /// Create a bare error carrying only the status.
    pub fn new(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            message: None,
            error_type: None,
            correlation_id: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.kind)?;
        if let Some(ref error_type) = self.error_type {
            write!(f, " [{}]", error_type)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(ref correlation_id) = self.correlation_id {
            write!(f, " (correlation id {})", correlation_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Find the first classified API error in a source chain.
pub fn find_api_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ApiError> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(api) = err.downcast_ref::<ApiError>() {
            return Some(api);
        }
        current = err.source();
    }
    None
}

fn chain_has_kind(err: &(dyn StdError + 'static), kind: ApiErrorKind) -> bool {
    find_api_error(err).is_some_and(|api| api.kind == kind)
}

pub fn is_not_found(err: &(dyn StdError + 'static)) -> bool {
    chain_has_kind(err, ApiErrorKind::NotFound)
}

pub fn is_unauthorized(err: &(dyn StdError + 'static)) -> bool {
    chain_has_kind(err, ApiErrorKind::Unauthorized)
}

pub fn is_forbidden(err: &(dyn StdError + 'static)) -> bool {
    chain_has_kind(err, ApiErrorKind::Forbidden)
}

pub fn is_rate_limited(err: &(dyn StdError + 'static)) -> bool {
    chain_has_kind(err, ApiErrorKind::RateLimited)
}

pub fn is_server_error(err: &(dyn StdError + 'static)) -> bool {
    chain_has_kind(err, ApiErrorKind::ServerError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_table() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::BadRequest);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimited);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::ServerError);
        assert_eq!(ApiErrorKind::from_status(599), ApiErrorKind::ServerError);
        assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Other);
        assert_eq!(ApiErrorKind::from_status(418), ApiErrorKind::Other);
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::from(ApiError::new(404).with_message("Contact not found"))
            .context("failed to fetch contact")
            .context("command failed");

        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
        assert_eq!(err.api_error().map(|e| e.status), Some(404));
    }

    #[test]
    fn free_predicates_walk_source_chain() {
        let err = Error::from(ApiError::new(429)).context("listing deals");
        assert!(is_rate_limited(&err));
        assert!(!is_not_found(&err));

        let bare = ApiError::new(403);
        assert!(is_forbidden(&bare));
    }

    #[test]
    fn invalid_input_is_not_api_error() {
        let err = Error::from(InvalidInputError::required("id"));
        assert!(err.is_invalid_input());
        assert!(err.api_error().is_none());
        assert_eq!(err.to_string(), "invalid input: id is required");
    }

    #[test]
    fn display_includes_message_and_correlation() {
        let err = ApiError::new(404)
            .with_message("Contact not found")
            .with_error_type("OBJECT_NOT_FOUND")
            .with_correlation_id("abc-123");
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("OBJECT_NOT_FOUND"));
        assert!(text.contains("Contact not found"));
        assert!(text.contains("abc-123"));
    }
}
