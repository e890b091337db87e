//! Resource type tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated resource type tag such as `contacts` or `deals`.
///
/// The tag has no internal structure; it is used verbatim as a URL path
/// segment, so it must be non-empty and free of path or query delimiters.
///
/// # Example
///
/// ```
/// use hubkit_core::ResourceType;
///
/// let contacts = ResourceType::new("contacts").unwrap();
/// assert_eq!(contacts.as_str(), "contacts");
/// assert!(ResourceType::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceType(String);

impl ResourceType {
    /// Create a new resource type, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is empty or cannot be used as a path segment.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.trim().is_empty() {
            return Err(InvalidInputError::required("resource type").into());
        }

        if let Some(c) = s
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
        {
            return Err(InvalidInputError::Other {
                message: format!("resource type '{}' contains invalid character '{}'", s, c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourceType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ResourceType> for String {
    fn from(resource: ResourceType) -> Self {
        resource.0
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
