//! Error types for the Stack Exchange client.
//!
//! # Design
//! Malformed calls (`MissingArguments`, `MalformedTemplate`) are raised
//! before any request is built. Lookup failures (`UnknownEndpoint`,
//! `UnknownTemplate`) come from the registry. `HttpError` and `Transport`
//! cover the wire, and `Api` carries the error triple the API embeds in a
//! decoded JSON body.

use thiserror::Error;

/// Errors returned by the registry, the query builder and the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A semantic path that is not in the registry.
    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),

    /// A template string that was never registered.
    #[error("unregistered endpoint template '{0}'")]
    UnknownTemplate(String),

    /// An HTTP method name other than GET or POST.
    #[error("unknown HTTP method '{0}'")]
    UnknownMethod(String),

    /// A base filter name outside `default`, `withbody`, `none`, `total`.
    #[error("unknown base filter '{0}'")]
    UnknownBaseFilter(String),

    /// Two catalogue records share a semantic path.
    #[error("endpoint '{0}' registered twice")]
    DuplicateEndpoint(String),

    /// One template string registered under two different methods.
    #[error("endpoint template '{template}' registered as both {first} and {second}")]
    ConflictingMethod {
        template: String,
        first: crate::http::HttpMethod,
        second: crate::http::HttpMethod,
    },

    /// A template with an unterminated or empty placeholder.
    #[error("malformed endpoint template '{0}'")]
    MalformedTemplate(String),

    /// One or more template placeholders had no matching parameter.
    #[error("API endpoint '{template}' missing required argument(s) {}", quote_all(.missing))]
    MissingArguments {
        template: String,
        missing: Vec<String>,
    },

    /// The session only executes GET requests.
    #[error("{method} requests are not supported for '{url}'")]
    UnsupportedMethod {
        method: crate::http::HttpMethod,
        url: String,
    },

    /// The server returned a status other than 200 or 400.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The decoded response carried an `error_id`.
    #[error("{name} {id}: {message}")]
    Api {
        id: i64,
        name: String,
        message: String,
    },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arguments_lists_every_name() {
        let err = ApiError::MissingArguments {
            template: "user/{ids}/comments/{to_id}".to_string(),
            missing: vec!["ids".to_string(), "to_id".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "API endpoint 'user/{ids}/comments/{to_id}' missing required argument(s) 'ids', 'to_id'"
        );
    }

    #[test]
    fn api_error_carries_all_three_fields() {
        let err = ApiError::Api {
            id: 400,
            name: "bad_parameter".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "bad_parameter 400: bad");
    }
}
