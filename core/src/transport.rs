//! Executes plain-data requests over the network.
//!
//! # Design
//! `Transport` is the seam between the deterministic client and real I/O.
//! `UreqTransport` is the blocking default; tests substitute an in-memory
//! implementation. Status codes are returned as data, never as errors, so
//! the client decides what a 400 or 500 means.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Transport {
    /// Perform one round trip. `Err` only when no response was received.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.url).send_empty(),
        };

        let mut response = result.map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
