//! Request inputs and response DTOs for the Stack Exchange API.
//!
//! Responses are decoded only as far as the client needs: the common
//! wrapper, filter items, and the error triple. Everything else is left as
//! `serde_json::Value` for the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::params::{self, QueryParameters};

/// Built-in filter presets controlling which fields a response includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseFilter {
    /// Default field set for each query type.
    #[default]
    Default,
    /// `Default` plus the `*.body` fields.
    WithBody,
    None,
    /// Only `.total`.
    Total,
}

impl BaseFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseFilter::Default => "default",
            BaseFilter::WithBody => "withbody",
            BaseFilter::None => "none",
            BaseFilter::Total => "total",
        }
    }
}

impl fmt::Display for BaseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(BaseFilter::Default),
            "withbody" => Ok(BaseFilter::WithBody),
            "none" => Ok(BaseFilter::None),
            "total" => Ok(BaseFilter::Total),
            _ => Err(ApiError::UnknownBaseFilter(s.to_string())),
        }
    }
}

/// Input for `filters/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub base: BaseFilter,
    /// Fields to add to the base filter.
    #[serde(default)]
    pub include: Vec<String>,
    /// Fields to remove from the base filter.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Whether returned strings may contain unescaped HTML.
    #[serde(default, rename = "unsafe")]
    pub allow_unsafe: bool,
}

impl FilterRequest {
    /// `unsafe` is sent as the literal text `true`/`false`, so it is never
    /// mistaken for the boolean default and always appears in the URL.
    pub fn to_parameters(&self) -> QueryParameters {
        QueryParameters::new()
            .with("base", self.base)
            .with("include", self.include.clone())
            .with("exclude", self.exclude.clone())
            .with("unsafe", if self.allow_unsafe { "true" } else { "false" })
    }
}

/// Typed input for the `questions` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsQuery {
    pub site: String,
    pub page: i64,
    pub pagesize: i64,
    /// Unix timestamp, inclusive.
    pub fromdate: i64,
    /// Unix timestamp, inclusive.
    pub todate: i64,
    /// `desc` or `asc`.
    pub order: String,
    /// One of `activity`, `votes`, `creation`, `hot`, `week`, `month`.
    pub sort: String,
    /// Lower bound on the field named by `sort`.
    pub min: i64,
    /// Upper bound on the field named by `sort`.
    pub max: i64,
    /// AND-constraint: every tag must match.
    pub tagged: Vec<String>,
}

impl QuestionsQuery {
    /// A query for `site` with every other field at its documented default.
    pub fn new(site: &str) -> Self {
        Self {
            site: site.to_string(),
            page: params::DEFAULT_PAGE,
            pagesize: params::DEFAULT_PAGESIZE,
            fromdate: params::DEFAULT_FROMDATE,
            todate: params::DEFAULT_TODATE,
            order: params::DEFAULT_ORDER.to_string(),
            sort: params::DEFAULT_SORT.to_string(),
            min: params::DEFAULT_MIN,
            max: params::DEFAULT_MAX,
            tagged: Vec::new(),
        }
    }

    pub fn to_parameters(&self) -> QueryParameters {
        QueryParameters::new()
            .with("site", self.site.as_str())
            .with("page", self.page)
            .with("pagesize", self.pagesize)
            .with("fromdate", self.fromdate)
            .with("todate", self.todate)
            .with("order", self.order.as_str())
            .with("sort", self.sort.as_str())
            .with("min", self.min)
            .with("max", self.max)
            .with("tagged", self.tagged.clone())
    }
}

/// The envelope every successful response is wrapped in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_remaining: Option<i64>,
}

/// One item of a `filters/create` or `filters/{filter}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub filter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_fields: Vec<String>,
}

/// The error triple the API places in the body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_id: i64,
    #[serde(default)]
    pub error_name: String,
    #[serde(default)]
    pub error_message: String,
}

impl From<ErrorBody> for ApiError {
    fn from(body: ErrorBody) -> Self {
        ApiError::Api {
            id: body.error_id,
            name: body.error_name,
            message: body.error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DefaultParameters, ParamValue};

    #[test]
    fn base_filter_parses_any_case() {
        assert_eq!("WithBody".parse::<BaseFilter>().unwrap(), BaseFilter::WithBody);
        assert!(matches!(
            "everything".parse::<BaseFilter>(),
            Err(ApiError::UnknownBaseFilter(_))
        ));
    }

    #[test]
    fn base_filter_serializes_lowercase() {
        assert_eq!(serde_json::to_value(BaseFilter::Total).unwrap(), "total");
    }

    #[test]
    fn filter_request_renders_unsafe_as_text() {
        let params = FilterRequest::default().to_parameters();
        assert_eq!(params.get("unsafe"), Some(&ParamValue::Text("false".to_string())));
        assert_eq!(params.get("base"), Some(&ParamValue::Text("default".to_string())));
    }

    #[test]
    fn filter_request_deserializes_with_defaults() {
        let req: FilterRequest = serde_json::from_str(r#"{"include":["question.body"]}"#).unwrap();
        assert_eq!(req.base, BaseFilter::Default);
        assert_eq!(req.include, vec!["question.body"]);
        assert!(!req.allow_unsafe);
    }

    #[test]
    fn questions_query_starts_at_defaults() {
        let query = QuestionsQuery::new("stackoverflow");
        assert_eq!(query.page, 1);
        assert_eq!(query.pagesize, 30);
        assert_eq!(query.todate, i64::MAX);
        assert_eq!(query.min, i64::MIN);
        assert_eq!(query.order, "desc");
        assert_eq!(query.sort, "activity");
    }

    #[test]
    fn questions_query_fields_are_all_defaults() {
        let defaults = DefaultParameters::standard();
        for (name, value) in QuestionsQuery::new("stackoverflow").to_parameters().iter() {
            if name != "site" {
                assert!(defaults.is_default(name, value), "{name}");
            }
        }
    }

    #[test]
    fn error_body_converts_to_api_error() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error_id":400,"error_name":"bad_parameter","error_message":"bad"}"#,
        )
        .unwrap();
        let err: ApiError = body.into();
        assert_eq!(err.to_string(), "bad_parameter 400: bad");
    }

    #[test]
    fn wrapper_tolerates_missing_quota_fields() {
        let wrapper: Wrapper<FilterItem> =
            serde_json::from_str(r#"{"items":[{"filter":"default"}]}"#).unwrap();
        assert_eq!(wrapper.items[0].filter, "default");
        assert!(!wrapper.has_more);
        assert!(wrapper.quota_max.is_none());
    }
}
