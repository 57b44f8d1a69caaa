//! One-call convenience over `StackExchangeClient` plus a `Transport`.
//!
//! Each call builds a request, performs exactly one blocking round trip and
//! parses the result. Nothing is carried between calls.

use serde_json::Value;

use crate::client::StackExchangeClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::params::QueryParameters;
use crate::registry::EndpointTemplate;
use crate::transport::{Transport, UreqTransport};
use crate::types::{FilterRequest, QuestionsQuery};

/// A `StackExchangeClient` paired with the `Transport` that executes its
/// requests. Only GET endpoints are sent.
#[derive(Debug, Clone)]
pub struct StackExchange<T = UreqTransport> {
    client: StackExchangeClient,
    transport: T,
}

impl StackExchange<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(StackExchangeClient::from_config(config), UreqTransport::new())
    }

    /// Configured from `STACKEXCHANGE_API_URL`, falling back to the public API.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(&ClientConfig::from_env()?))
    }

    /// Configured from a JSON document such as `{"base_url": "..."}`.
    pub fn from_json_config(raw: &str) -> Result<Self, ApiError> {
        Ok(Self::new(&ClientConfig::from_json(raw)?))
    }
}

impl<T: Transport> StackExchange<T> {
    pub fn with_transport(client: StackExchangeClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &StackExchangeClient {
        &self.client
    }

    /// Fetch an endpoint and return the decoded body.
    pub fn query(
        &self,
        endpoint: &EndpointTemplate,
        parameters: &QueryParameters,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_query(endpoint, parameters)?;
        let response = self.send(request)?;
        self.client.parse_response(response)
    }

    /// `query` by semantic path, e.g. `&["questions", "by_id", "all"]`.
    pub fn query_path(&self, path: &[&str], parameters: &QueryParameters) -> Result<Value, ApiError> {
        let endpoint = self.client.resolve(path)?;
        self.query(&endpoint, parameters)
    }

    pub fn questions(&self, query: &QuestionsQuery) -> Result<Value, ApiError> {
        let request = self.client.build_questions(query)?;
        let response = self.send(request)?;
        self.client.parse_response(response)
    }

    /// Create a filter and return its identifier string.
    pub fn create_filter(&self, request: &FilterRequest) -> Result<String, ApiError> {
        let request = self.client.build_create_filter(request)?;
        let response = self.send(request)?;
        self.client.parse_create_filter(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        // write endpoints need an access token, which this client does not manage
        if request.method != HttpMethod::Get {
            return Err(ApiError::UnsupportedMethod {
                method: request.method,
                url: request.url,
            });
        }
        self.transport.execute(&request)
    }
}
