//! Records and pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::property::{PropertyMap, property_string};

/// A remote object instance.
///
/// Records are only ever produced by the server; updates go through the
/// client and the returned record replaces any copy the caller holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,

    /// Property bag; unknown keys are simply absent.
    #[serde(default)]
    pub properties: PropertyMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub archived: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Display string for a property; missing properties render as `""`.
    pub fn property_string(&self, key: &str) -> String {
        property_string(&self.properties, key)
    }

    /// The record id followed by the requested properties, for table rows.
    pub fn row<S: AsRef<str>>(&self, properties: &[S]) -> Vec<String> {
        std::iter::once(self.id.clone())
            .chain(properties.iter().map(|p| self.property_string(p.as_ref())))
            .collect()
    }
}

/// Cursor to the next page, as issued by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPage {
    pub after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Paging block of a page response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,
}

/// One page of results.
///
/// A page without a next cursor is the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T = Record> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    /// Total match count, reported by search endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    /// Cursor for the next call, exactly as the server issued it.
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_ref())
            .map(|n| n.after.as_str())
            .filter(|after| !after.is_empty())
    }

    /// Returns true if no further pages exist.
    pub fn is_last(&self) -> bool {
        self.next_cursor().is_none()
    }
}
