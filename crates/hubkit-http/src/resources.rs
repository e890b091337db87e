//! Generic resource CRUD and search client.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use hubkit_core::error::{InvalidInputError, TransportError};
use hubkit_core::types::join_properties;
use hubkit_core::{
    ApiFamily, BaseUrl, ListOptions, Method, Page, PropertyMap, Record, ResourceType, Result,
    SearchRequest, Transport,
};

use crate::paginator::Paginator;
use crate::transport::HttpTransport;

/// Request body for create and update calls.
#[derive(Debug, Serialize)]
struct PropertiesBody<'a> {
    properties: &'a PropertyMap,
}

/// CRUD and search over any resource type of one API family.
///
/// Every operation validates its arguments before touching the transport
/// and issues at most one request.
#[derive(Debug, Clone)]
pub struct ResourceClient<T = HttpTransport> {
    transport: T,
    base: BaseUrl,
    family: ApiFamily,
}

impl<T: Transport> ResourceClient<T> {
    /// Create a client over a transport, bound to CRM v3.
    pub fn new(transport: T, base: BaseUrl) -> Self {
        Self {
            transport,
            base,
            family: ApiFamily::default(),
        }
    }

    /// Bind this client to another API family.
    pub fn with_family(mut self, family: ApiFamily) -> Self {
        self.family = family;
        self
    }

    pub fn family(&self) -> ApiFamily {
        self.family
    }

    /// List one page of records.
    #[instrument(skip(self, options), fields(%resource, family = %self.family))]
    pub async fn list(&self, resource: &ResourceType, options: &ListOptions) -> Result<Page> {
        debug!(after = ?options.after, "Listing records");
        let url = self.url(resource, &[]);
        self.request(Method::Get, &url, &options.query_pairs(), None)
            .await
    }

    /// Fetch one record by id.
    #[instrument(skip(self, properties), fields(%resource, family = %self.family))]
    pub async fn get(
        &self,
        resource: &ResourceType,
        id: &str,
        properties: &[String],
    ) -> Result<Record> {
        let id = require_id(id)?;
        debug!(id, "Getting record");

        let query: Vec<_> = join_properties(properties)
            .map(|p| ("properties", p))
            .into_iter()
            .collect();
        let url = self.url(resource, &[id]);
        self.request(Method::Get, &url, &query, None).await
    }

    /// Create a record from a property bag.
    #[instrument(skip(self, properties), fields(%resource, family = %self.family))]
    pub async fn create(&self, resource: &ResourceType, properties: &PropertyMap) -> Result<Record> {
        debug!(count = properties.len(), "Creating record");
        let body = encode(&PropertiesBody { properties })?;
        let url = self.url(resource, &[]);
        self.request(Method::Post, &url, &[], Some(&body)).await
    }

    /// Patch the supplied properties of a record.
    #[instrument(skip(self, properties), fields(%resource, family = %self.family))]
    pub async fn update(
        &self,
        resource: &ResourceType,
        id: &str,
        properties: &PropertyMap,
    ) -> Result<Record> {
        let id = require_id(id)?;
        if properties.is_empty() {
            return Err(InvalidInputError::required("properties").into());
        }
        debug!(id, count = properties.len(), "Updating record");

        let body = encode(&PropertiesBody { properties })?;
        let url = self.url(resource, &[id]);
        self.request(Method::Patch, &url, &[], Some(&body)).await
    }

    /// Delete (archive) a record.
    #[instrument(skip(self), fields(%resource, family = %self.family))]
    pub async fn delete(&self, resource: &ResourceType, id: &str) -> Result<()> {
        let id = require_id(id)?;
        debug!(id, "Deleting record");

        let url = self.url(resource, &[id]);
        self.transport
            .execute(Method::Delete, &url, &[], None)
            .await?;
        Ok(())
    }

    /// Search records with ORed filter groups of ANDed filters.
    #[instrument(skip(self, request), fields(%resource, family = %self.family))]
    pub async fn search(&self, resource: &ResourceType, request: &SearchRequest) -> Result<Page> {
        debug!(groups = request.filter_groups.len(), "Searching records");
        let body = encode(request)?;
        let url = self.url(resource, &["search"]);
        self.request(Method::Post, &url, &[], Some(&body)).await
    }

    /// A paginator over all records of `resource`, following server cursors.
    pub fn paginate<'a>(
        &'a self,
        resource: &'a ResourceType,
        options: ListOptions,
    ) -> Paginator<'a, T> {
        Paginator::new(self, resource, options)
    }

    /// Collect every record, stopping after `max_pages` pages if given.
    pub async fn list_all(
        &self,
        resource: &ResourceType,
        options: ListOptions,
        max_pages: Option<usize>,
    ) -> Result<Vec<Record>> {
        let mut paginator = self.paginate(resource, options);
        let mut records = Vec::new();
        while let Some(page) = paginator.next_page().await? {
            records.extend(page.results);
            if max_pages.is_some_and(|max| paginator.pages_fetched() >= max) {
                break;
            }
        }
        Ok(records)
    }

    fn url(&self, resource: &ResourceType, rest: &[&str]) -> String {
        let prefix = [
            self.family.family(),
            self.family.version(),
            "objects",
            resource.as_str(),
        ];
        self.base
            .segments_url(prefix.iter().chain(rest.iter()))
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<R> {
        let bytes = self.transport.execute(method, url, query, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        Err(InvalidInputError::required("id").into())
    } else {
        Ok(id)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| {
        TransportError::Encode {
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubkit_core::AccessToken;

    use crate::ClientConfig;

    fn client() -> ResourceClient {
        let config = ClientConfig::hubapi().unwrap();
        let token = AccessToken::new("pat-test").unwrap();
        let transport = HttpTransport::new(&config, &token).unwrap();
        ResourceClient::new(transport, config.base_url)
    }

    #[test]
    fn collection_and_record_urls() {
        let client = client();
        let contacts = ResourceType::new("contacts").unwrap();
        assert_eq!(
            client.url(&contacts, &[]),
            "https://api.hubapi.com/crm/v3/objects/contacts"
        );
        assert_eq!(
            client.url(&contacts, &["512"]),
            "https://api.hubapi.com/crm/v3/objects/contacts/512"
        );
        assert_eq!(
            client.url(&contacts, &["search"]),
            "https://api.hubapi.com/crm/v3/objects/contacts/search"
        );
    }

    #[test]
    fn family_changes_prefix() {
        let client = client().with_family(ApiFamily::CmsV3);
        let pages = ResourceType::new("pages").unwrap();
        assert_eq!(
            client.url(&pages, &[]),
            "https://api.hubapi.com/cms/v3/objects/pages"
        );
    }

    #[test]
    fn blank_id_is_required() {
        assert!(require_id("").is_err());
        assert!(require_id("  ").is_err());
        assert_eq!(require_id(" 42 ").unwrap(), "42");
    }
}
