//! Credential sources.
//!
//! The client never stores credentials itself; it asks a [`CredentialSource`]
//! once at construction and keeps the resulting [`AccessToken`] for its
//! lifetime.

use std::fmt;

use crate::Result;
use crate::error::AuthError;
use crate::tokens::AccessToken;

/// Default environment variable holding the access token.
pub const DEFAULT_TOKEN_VAR: &str = "HUB_ACCESS_TOKEN";

/// Something that can supply a bearer token.
pub trait CredentialSource {
    /// A short description used in error messages (never the token itself).
    fn describe(&self) -> String;

    /// Returns the token, or `None` if this source has none.
    fn token(&self) -> Option<String>;

    /// Returns the token as an [`AccessToken`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] if the source is empty.
    fn access_token(&self) -> Result<AccessToken> {
        self.token()
            .and_then(AccessToken::new)
            .ok_or_else(|| {
                AuthError::MissingCredentials {
                    source_name: self.describe(),
                }
                .into()
            })
    }
}

/// A token supplied directly, e.g. from a command-line flag.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CredentialSource for StaticToken {
    fn describe(&self) -> String {
        "static token".to_string()
    }

    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

// Intentionally hide the token in Debug output
impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"[REDACTED]").finish()
    }
}

/// A token read from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR)
    }
}

impl CredentialSource for EnvToken {
    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}
