//! Search request model.
//!
//! `filter_groups` is a disjunction of conjunctions: groups are ORed together
//! by the server, filters inside one group are ANDed. Operators are passed
//! through verbatim; their legality is decided server-side.

use serde::{Deserialize, Serialize};

/// A single property filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    /// Operator such as `EQ`, `GT` or `CONTAINS_TOKEN`.
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Filter {
    pub fn new(
        property_name: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            operator: operator.into(),
            value: Some(value.into()),
        }
    }

    /// A filter without a value, for operators like `HAS_PROPERTY`.
    pub fn unary(property_name: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            operator: operator.into(),
            value: None,
        }
    }

    /// Parse `property:OPERATOR:value` (or `property:OPERATOR`).
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(3, ':');
        let property = parts.next().filter(|p| !p.is_empty())?;
        let operator = parts.next().filter(|o| !o.is_empty())?;
        Some(match parts.next() {
            Some(value) => Filter::new(property, operator, value),
            None => Filter::unary(property, operator),
        })
    }
}

/// Filters that must all match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

impl FilterGroup {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sort clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub property_name: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Request body for a search call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    /// Free-text query, matched against the default searchable properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ORed group of ANDed filters.
    pub fn or_group(mut self, filters: Vec<Filter>) -> Self {
        self.filter_groups.push(FilterGroup::new(filters));
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
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

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_body() {
        let request = SearchRequest::new()
            .or_group(vec![
                Filter::new("email", "CONTAINS_TOKEN", "*@example.com"),
                Filter::new("lifecyclestage", "EQ", "lead"),
            ])
            .or_group(vec![Filter::unary("phone", "HAS_PROPERTY")])
            .sort(Sort::descending("createdate"))
            .properties(["email", "firstname"])
            .limit(10)
            .after("abc123");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "filterGroups": [
                    {"filters": [
                        {"propertyName": "email", "operator": "CONTAINS_TOKEN", "value": "*@example.com"},
                        {"propertyName": "lifecyclestage", "operator": "EQ", "value": "lead"}
                    ]},
                    {"filters": [
                        {"propertyName": "phone", "operator": "HAS_PROPERTY"}
                    ]}
                ],
                "sorts": [{"propertyName": "createdate", "direction": "DESCENDING"}],
                "properties": ["email", "firstname"],
                "limit": 10,
                "after": "abc123"
            })
        );
    }

    #[test]
    fn empty_request_is_empty_object() {
        let value = serde_json::to_value(SearchRequest::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn parses_filter_specs() {
        assert_eq!(
            Filter::parse("amount:GT:1000"),
            Some(Filter::new("amount", "GT", "1000"))
        );
        assert_eq!(
            Filter::parse("url:EQ:https://example.com"),
            Some(Filter::new("url", "EQ", "https://example.com"))
        );
        assert_eq!(
            Filter::parse("phone:HAS_PROPERTY"),
            Some(Filter::unary("phone", "HAS_PROPERTY"))
        );
        assert_eq!(Filter::parse("phone"), None);
        assert_eq!(Filter::parse(":EQ:x"), None);
    }
}
