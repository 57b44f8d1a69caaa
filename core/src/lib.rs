//! Synchronous client core for the Stack Exchange 2.2 API.
//!
//! # Overview
//! Endpoints are looked up by semantic path in an immutable registry
//! (`questions.by_id.answers.all`), turned into URLs by filling their
//! `{placeholders}` and appending non-default parameters, and executed as
//! plain-data `HttpRequest` values (host-does-IO pattern).
//!
//! # Design
//! - `EndpointRegistry` is built once from the literal catalogue in
//!   `endpoints` and is read-only afterwards.
//! - `StackExchangeClient` is stateless: `build_*` produces a request and
//!   `parse_*` consumes a response.
//! - `StackExchange` pairs the client with a blocking `Transport` for
//!   callers who want the round trip done for them.
//!
//! ```no_run
//! use stackexchange_core::{QueryParameters, StackExchange, ClientConfig};
//!
//! let se = StackExchange::new(&ClientConfig::default());
//! let params = QueryParameters::new().with("ids", vec![11227809]).with("site", "stackoverflow");
//! let answers = se.query_path(&["questions", "by_id", "answers", "all"], &params)?;
//! # Ok::<(), stackexchange_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod params;
pub mod query;
pub mod registry;
pub mod session;
pub mod transport;
pub mod types;

pub use client::StackExchangeClient;
pub use config::{ClientConfig, API_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{DefaultParameters, ParamValue, QueryParameters};
pub use query::build_url;
pub use registry::{EndpointRegistry, EndpointTemplate};
pub use session::StackExchange;
pub use transport::{Transport, UreqTransport};
pub use types::{BaseFilter, FilterRequest, QuestionsQuery};
