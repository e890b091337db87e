//! List query options.

/// Options for a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page size; omitted from the query when `None` or zero.
    pub limit: Option<u32>,
    /// Server-issued cursor; omitted when `None` or empty.
    pub after: Option<String>,
    /// Properties to return, joined with commas in the given order.
    pub properties: Vec<String>,
    /// Return archived records instead of live ones.
    pub archived: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Query parameters for this request, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(after) = self.after.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(("after", after.to_string()));
        }
        if let Some(properties) = join_properties(&self.properties) {
            pairs.push(("properties", properties));
        }
        if let Some(archived) = self.archived {
            pairs.push(("archived", archived.to_string()));
        }
        pairs
    }
}

/// Comma-join property names, preserving order and duplicates.
pub fn join_properties<S: AsRef<str>>(properties: &[S]) -> Option<String> {
    if properties.is_empty() {
        return None;
    }
    Some(
        properties
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(","),
    )
}
