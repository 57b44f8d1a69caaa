//! Endpoint registry: semantic path → (method, path template).
//!
//! # Design
//! The registry is a flat map keyed by the lower-cased dotted path
//! (`questions.by_id.edit`), built once from a declarative table and never
//! mutated afterwards. A second index maps each template string back to its
//! HTTP method so callers holding only the raw template can still dispatch.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use crate::endpoints::{EndpointRecord, ENDPOINTS};
use crate::error::ApiError;
use crate::http::HttpMethod;

static STANDARD: LazyLock<EndpointRegistry> = LazyLock::new(|| {
    EndpointRegistry::from_table(ENDPOINTS).expect("built-in endpoint catalogue is consistent")
});

/// A URL path pattern with named `{placeholder}` slots and its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointTemplate {
    pub method: HttpMethod,
    pub template: &'static str,
}

impl EndpointTemplate {
    pub fn as_str(&self) -> &'static str {
        self.template
    }

    /// Placeholder names in order of first appearance, without duplicates.
    pub fn placeholders(&self) -> Result<Vec<&'static str>, ApiError> {
        crate::query::placeholders(self.template)
    }
}

impl fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.template)
    }
}

/// Immutable lookup table of every known endpoint.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    by_path: BTreeMap<String, EndpointTemplate>,
    methods: HashMap<&'static str, HttpMethod>,
}

impl EndpointRegistry {
    /// Build a registry from literal records.
    ///
    /// Semantic paths are compared lower-cased, so `Questions.All` and
    /// `questions.all` collide.
    pub fn from_table(records: &[EndpointRecord]) -> Result<Self, ApiError> {
        let mut by_path = BTreeMap::new();
        let mut methods: HashMap<&'static str, HttpMethod> = HashMap::new();

        for record in records {
            let key = normalize(record.path.split('.'));
            let template = EndpointTemplate {
                method: record.method,
                template: record.template,
            };
            if by_path.insert(key.clone(), template).is_some() {
                return Err(ApiError::DuplicateEndpoint(key));
            }
            match methods.get(record.template) {
                Some(&first) if first != record.method => {
                    return Err(ApiError::ConflictingMethod {
                        template: record.template.to_string(),
                        first,
                        second: record.method,
                    });
                }
                Some(_) => {}
                None => {
                    methods.insert(record.template, record.method);
                }
            }
        }

        Ok(Self { by_path, methods })
    }

    /// The process-wide registry over the built-in catalogue.
    pub fn standard() -> &'static EndpointRegistry {
        &STANDARD
    }

    /// Look up an endpoint by its path components, ignoring case.
    pub fn resolve(&self, path: &[&str]) -> Result<EndpointTemplate, ApiError> {
        let key = normalize(path.iter().copied());
        self.by_path
            .get(&key)
            .copied()
            .ok_or(ApiError::UnknownEndpoint(key))
    }

    /// Same as `resolve`, taking `"questions.by_id.edit"`.
    pub fn resolve_dotted(&self, path: &str) -> Result<EndpointTemplate, ApiError> {
        let components: Vec<&str> = path.split('.').collect();
        self.resolve(&components)
    }

    /// HTTP method registered for a raw template string.
    pub fn method_of(&self, template: &str) -> Result<HttpMethod, ApiError> {
        self.methods
            .get(template)
            .copied()
            .ok_or_else(|| ApiError::UnknownTemplate(template.to_string()))
    }

    /// First semantic path (in sorted order) registered for `template`.
    pub fn path_of(&self, template: &str) -> Option<&str> {
        self.by_path
            .iter()
            .find(|(_, t)| t.template == template)
            .map(|(path, _)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// All `(semantic path, template)` pairs, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EndpointTemplate)> {
        self.by_path.iter().map(|(p, t)| (p.as_str(), *t))
    }
}

fn normalize<'a>(components: impl Iterator<Item = &'a str>) -> String {
    components
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}
