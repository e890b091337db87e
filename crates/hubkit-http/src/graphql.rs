//! GraphQL execution and schema introspection.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use hubkit_core::error::{GraphqlFailure, InvalidInputError, TransportError};
use hubkit_core::graphql::{GraphqlRequest, INTROSPECTION_QUERY, IntrospectionData};
use hubkit_core::{BaseUrl, GraphqlResponse, Method, Result, Schema, Transport};

use crate::transport::HttpTransport;

/// Path of the GraphQL endpoint, relative to the base URL.
pub const GRAPHQL_PATH: &str = "collector/graphql";

/// Client for the GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlClient<T = HttpTransport> {
    transport: T,
    url: String,
}

impl<T: Transport> GraphqlClient<T> {
    pub fn new(transport: T, base: &BaseUrl) -> Self {
        Self {
            transport,
            url: base.join(GRAPHQL_PATH),
        }
    }

    /// Execute a query or mutation.
    ///
    /// GraphQL-level errors are part of the returned response, not a call
    /// failure; check [`GraphqlResponse::has_errors`].
    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> Result<GraphqlResponse> {
        self.execute_as(query, variables).await
    }

    /// Execute and decode `data` into `R`.
    ///
    /// When the response carries GraphQL errors and the partial `data` does
    /// not fit `R`, `data` is dropped and the errors are returned as usual.
    /// Without errors, a `data` shape mismatch fails with [`Error::Decode`].
    ///
    /// [`Error::Decode`]: hubkit_core::Error::Decode
    #[instrument(skip_all)]
    pub async fn execute_as<R: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> Result<GraphqlResponse<R>> {
        if query.trim().is_empty() {
            return Err(InvalidInputError::required("query").into());
        }

        let request = GraphqlRequest {
            query,
            variables,
            operation_name: None,
        };
        let body = serde_json::to_value(&request).map_err(|e| TransportError::Encode {
            message: e.to_string(),
        })?;

        debug!(has_variables = variables.is_some(), "GraphQL request");
        let bytes = self
            .transport
            .execute(Method::Post, &self.url, &[], Some(&body))
            .await?;

        let response: GraphqlResponse = serde_json::from_slice(&bytes)?;
        if response.has_errors() {
            warn!(count = response.errors.len(), "GraphQL response carried errors");
        }
        decode_data(response)
    }

    /// Introspect the schema.
    ///
    /// Unlike [`GraphqlClient::execute`], any GraphQL error fails the call:
    /// a partial schema is not usable.
    #[instrument(skip_all)]
    pub async fn introspect_schema(&self) -> Result<Schema> {
        let response = self.execute(INTROSPECTION_QUERY, None).await?;

        if response.has_errors() {
            return Err(GraphqlFailure::Introspection {
                messages: response.error_messages(),
            }
            .into());
        }

        let data = response.data.ok_or(GraphqlFailure::MissingData)?;
        let data: IntrospectionData = serde_json::from_value(data)?;
        debug!(types = data.schema.types.len(), "Schema introspected");
        Ok(data.schema)
    }
}

/// Convert the untyped `data` of a response into `R`.
fn decode_data<R: DeserializeOwned>(response: GraphqlResponse) -> Result<GraphqlResponse<R>> {
    let GraphqlResponse {
        data,
        errors,
        extensions,
    } = response;

    let data = match data.map(serde_json::from_value::<R>).transpose() {
        Ok(data) => data,
        Err(err) if !errors.is_empty() => {
            debug!(error = %err, "Dropping partial data that does not match the requested type");
            None
        }
        Err(err) => return Err(err.into()),
    };

    Ok(GraphqlResponse {
        data,
        errors,
        extensions,
    })
}
