//! URL construction from an endpoint template and named parameters.
//!
//! Placeholders are `{name}` slots. A parameter consumed by a placeholder is
//! not repeated in the query string, and parameters equal to their
//! documented default are dropped. Values are inserted verbatim: callers
//! pass URL-safe values.

use crate::error::ApiError;
use crate::params::{DefaultParameters, QueryParameters};

/// A template split into literal text and `{name}` slots.
enum Segment<'a> {
    Literal(&'a str),
    Slot(&'a str),
}

fn segments(template: &str) -> Result<Vec<Segment<'_>>, ApiError> {
    let malformed = || ApiError::MalformedTemplate(template.to_string());
    let mut parts = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let literal = &rest[..open];
        if literal.contains('}') {
            return Err(malformed());
        }
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(malformed)?;
        let name = &after[..close];
        if name.is_empty() || name.contains('{') {
            return Err(malformed());
        }
        if !literal.is_empty() {
            parts.push(Segment::Literal(literal));
        }
        parts.push(Segment::Slot(name));
        rest = &after[close + 1..];
    }
    if rest.contains('}') {
        return Err(malformed());
    }
    if !rest.is_empty() {
        parts.push(Segment::Literal(rest));
    }
    Ok(parts)
}

/// Placeholder names in `template`, first appearance order, de-duplicated.
pub fn placeholders(template: &str) -> Result<Vec<&str>, ApiError> {
    let mut names: Vec<&str> = Vec::new();
    for segment in segments(template)? {
        if let Segment::Slot(name) = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    Ok(names)
}

/// Fill `template` from `parameters` and append the remaining non-default
/// parameters as a query string.
///
/// Fails with `MissingArguments` naming every absent placeholder before any
/// part of the URL is built.
pub fn build_url(
    base_url: &str,
    template: &str,
    parameters: &QueryParameters,
    defaults: &DefaultParameters,
) -> Result<String, ApiError> {
    let parts = segments(template)?;
    let mut slots: Vec<&str> = Vec::new();
    for part in &parts {
        if let Segment::Slot(name) = part {
            if !slots.contains(name) {
                slots.push(*name);
            }
        }
    }

    let missing: Vec<String> = slots
        .iter()
        .filter(|name| !parameters.contains(name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::MissingArguments {
            template: template.to_string(),
            missing,
        });
    }

    // single pass: inserted values are never rescanned for slots
    let mut path = String::with_capacity(template.len());
    for part in &parts {
        match part {
            Segment::Literal(text) => path.push_str(text),
            Segment::Slot(name) => {
                if let Some(value) = parameters.get(name) {
                    path.push_str(&value.render());
                }
            }
        }
    }

    let query = parameters
        .iter()
        .filter(|(name, _)| !slots.contains(name))
        .filter(|(name, value)| !defaults.is_default(name, value))
        .map(|(name, value)| format!("{name}={}", value.render()))
        .collect::<Vec<_>>()
        .join("&");

    let mut url = format!("{base_url}{path}");
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;
    use crate::registry::EndpointRegistry;

    const BASE: &str = "https://api.stackexchange.com/2.2/";

    fn build(template: &str, params: &QueryParameters) -> Result<String, ApiError> {
        build_url(BASE, template, params, &DefaultParameters::standard())
    }

    #[test]
    fn extracts_placeholders_in_order() {
        assert_eq!(
            placeholders("users/{id}/tags/{tags}/top-answers").unwrap(),
            vec!["id", "tags"]
        );
        assert!(placeholders("questions").unwrap().is_empty());
    }

    #[test]
    fn repeated_placeholder_is_listed_once() {
        assert_eq!(placeholders("{a}/{b}/{a}").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn malformed_templates_are_rejected() {
        for bad in ["answers/{id", "answers/{}/accept", "answers/id}", "a/{{id}}", "a}/{b}"] {
            assert!(
                matches!(placeholders(bad), Err(ApiError::MalformedTemplate(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn fills_placeholder_without_query_string() {
        let url = build("answers/{id}/accept", &QueryParameters::new().with("id", 42)).unwrap();
        assert_eq!(url, format!("{BASE}answers/42/accept"));
    }

    #[test]
    fn inserted_values_are_not_expanded_again() {
        let params = QueryParameters::new().with("ids", "{to_id}").with("to_id", 5);
        let url = build_url("B/", "user/{ids}/comments/{to_id}", &params, &DefaultParameters::none())
            .unwrap();
        assert_eq!(url, "B/user/{to_id}/comments/5");
    }

    #[test]
    fn repeated_placeholder_is_filled_everywhere() {
        let params = QueryParameters::new().with("a", 1).with("b", 2);
        let url = build("{a}/{b}/{a}", &params).unwrap();
        assert_eq!(url, format!("{BASE}1/2/1"));
    }

    #[test]
    fn list_placeholder_is_semicolon_joined() {
        let params = QueryParameters::new().with("ids", vec![11, 22, 33]);
        let url = build("questions/{ids}/answers", &params).unwrap();
        assert_eq!(url, format!("{BASE}questions/11;22;33/answers"));
    }

    #[test]
    fn placeholder_parameters_stay_out_of_the_query() {
        let params = QueryParameters::new()
            .with("ids", vec![1, 2])
            .with("site", "stackoverflow");
        let url = build("questions/{ids}", &params).unwrap();
        assert_eq!(url, format!("{BASE}questions/1;2?site=stackoverflow"));
    }

    #[test]
    fn default_valued_parameters_are_omitted() {
        let params = QueryParameters::new()
            .with("site", "stackoverflow")
            .with("page", 1)
            .with("pagesize", 30)
            .with("order", "desc")
            .with("sort", "activity")
            .with("tagged", Vec::<String>::new())
            .with("todate", i64::MAX)
            .with("min", i64::MIN);
        let url = build("questions", &params).unwrap();
        assert_eq!(url, format!("{BASE}questions?site=stackoverflow"));
    }

    #[test]
    fn non_default_parameters_are_kept() {
        let params = QueryParameters::new()
            .with("site", "stackoverflow")
            .with("page", 2)
            .with("tagged", ["rust", "serde"]);
        let url = build("questions", &params).unwrap();
        assert_eq!(
            url,
            format!("{BASE}questions?page=2&site=stackoverflow&tagged=rust;serde")
        );
    }

    #[test]
    fn missing_argument_is_named() {
        let err = build("answers/{id}/accept", &QueryParameters::new()).unwrap_err();
        match err {
            ApiError::MissingArguments { template, missing } => {
                assert_eq!(template, "answers/{id}/accept");
                assert_eq!(missing, vec!["id"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn all_missing_arguments_are_listed() {
        let err = build("user/{ids}/comments/{to_id}", &QueryParameters::new()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'ids', 'to_id'"), "{message}");
    }

    #[test]
    fn every_partial_subset_reports_exactly_the_unsupplied() {
        for (path, endpoint) in EndpointRegistry::standard().iter() {
            let slots = endpoint.placeholders().unwrap();
            let n = slots.len();
            for mask in 0..(1u32 << n) {
                if mask.count_ones() as usize == n {
                    continue;
                }
                let mut params = QueryParameters::new();
                let mut expected = Vec::new();
                for (i, slot) in slots.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        params.insert(slot, 1);
                    } else {
                        expected.push(slot.to_string());
                    }
                }
                match build(endpoint.template, &params) {
                    Err(ApiError::MissingArguments { missing, .. }) => {
                        assert_eq!(missing, expected, "{path}")
                    }
                    other => panic!("{path}: expected missing arguments, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn default_table_entries_never_reach_the_query() {
        let defaults = DefaultParameters::standard();
        let names = [
            "page", "pagesize", "fromdate", "todate", "order", "sort", "min", "max", "tagged",
            "include", "exclude", "unsafe", "base",
        ];
        for name in names {
            let value: ParamValue = defaults.get(name).cloned().unwrap();
            let params = QueryParameters::new().with(name, value);
            let url = build("questions", &params).unwrap();
            assert_eq!(url, format!("{BASE}questions"), "{name}");
        }
    }

    #[test]
    fn empty_default_table_keeps_everything() {
        let params = QueryParameters::new().with("page", 1);
        let url = build_url(BASE, "questions", &params, &DefaultParameters::none()).unwrap();
        assert_eq!(url, format!("{BASE}questions?page=1"));
    }
}
