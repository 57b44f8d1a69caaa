//! Stateless request builder and response parser for the Stack Exchange API.
//!
//! # Design
//! `StackExchangeClient` holds a base URL, the endpoint registry and the
//! default-parameter table, and carries no mutable state between calls.
//! Every operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller (or `StackExchange`) executes the round trip.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::params::{DefaultParameters, QueryParameters};
use crate::query::build_url;
use crate::registry::{EndpointRegistry, EndpointTemplate};
use crate::types::{ErrorBody, FilterItem, FilterRequest, QuestionsQuery, Wrapper};

/// The "bad request" status whose JSON body is handed back to the caller
/// instead of being turned into `HttpError`.
pub const BAD_REQUEST: u16 = 400;

/// Synchronous, stateless client for the Stack Exchange API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Endpoint lookup goes through the shared
/// `EndpointRegistry`; default-valued parameters are dropped from URLs.
#[derive(Debug, Clone)]
pub struct StackExchangeClient {
    base_url: String,
    registry: &'static EndpointRegistry,
    defaults: DefaultParameters,
}

impl StackExchangeClient {
    /// `base_url` is normalized to end with exactly one `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
            registry: EndpointRegistry::standard(),
            defaults: DefaultParameters::standard(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    /// Replace the table used to drop default-valued parameters.
    pub fn with_defaults(mut self, defaults: DefaultParameters) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn registry(&self) -> &'static EndpointRegistry {
        self.registry
    }

    pub fn resolve(&self, path: &[&str]) -> Result<EndpointTemplate, ApiError> {
        self.registry.resolve(path)
    }

    pub fn build_query(
        &self,
        endpoint: &EndpointTemplate,
        parameters: &QueryParameters,
    ) -> Result<HttpRequest, ApiError> {
        let url = build_url(&self.base_url, endpoint.template, parameters, &self.defaults)?;
        Ok(HttpRequest {
            method: endpoint.method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    /// Build from a raw template string; its method comes from the registry.
    pub fn build_query_for(
        &self,
        template: &str,
        parameters: &QueryParameters,
    ) -> Result<HttpRequest, ApiError> {
        let method = self.registry.method_of(template)?;
        let url = build_url(&self.base_url, template, parameters, &self.defaults)?;
        Ok(HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    /// Resolve a semantic path and build the request in one step.
    pub fn build_endpoint(
        &self,
        path: &[&str],
        parameters: &QueryParameters,
    ) -> Result<HttpRequest, ApiError> {
        let endpoint = self.registry.resolve(path)?;
        self.build_query(&endpoint, parameters)
    }

    pub fn build_create_filter(&self, request: &FilterRequest) -> Result<HttpRequest, ApiError> {
        self.build_endpoint(&["filters", "create"], &request.to_parameters())
    }

    pub fn build_questions(&self, query: &QuestionsQuery) -> Result<HttpRequest, ApiError> {
        self.build_endpoint(&["questions", "all"], &query.to_parameters())
    }

    /// Decode the body as JSON.
    ///
    /// 200 and 400 both decode, so an API error body reaches the caller
    /// intact; any other status is an `HttpError`.
    pub fn parse_json(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// `parse_json`, then turn an embedded `error_id` into `ApiError::Api`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        let json = self.parse_json(response)?;
        check_api_error(&json)?;
        Ok(json)
    }

    /// Extract `items[0].filter`.
    pub fn parse_create_filter(&self, response: HttpResponse) -> Result<String, ApiError> {
        let json = self.parse_response(response)?;
        let wrapper: Wrapper<FilterItem> = serde_json::from_value(json)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        wrapper
            .items
            .into_iter()
            .next()
            .map(|item| item.filter)
            .ok_or_else(|| ApiError::DeserializationError("response contained no filter".to_string()))
    }
}

impl Default for StackExchangeClient {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 || response.status == BAD_REQUEST {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Map a decoded body carrying `error_id` to `ApiError::Api`.
fn check_api_error(json: &Value) -> Result<(), ApiError> {
    if json.get("error_id").is_none() {
        return Ok(());
    }
    match serde_json::from_value::<ErrorBody>(json.clone()) {
        Ok(body) => Err(body.into()),
        Err(e) => Err(ApiError::DeserializationError(format!("malformed error body: {e}"))),
    }
}
