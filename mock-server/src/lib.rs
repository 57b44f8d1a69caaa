use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const BASE_FILTERS: [&str; 4] = ["default", "withbody", "none", "total"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub question_id: i64,
    pub title: String,
    pub tags: Vec<String>,
    pub score: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wrapper<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub quota_max: i64,
    pub quota_remaining: i64,
}

impl<T> Wrapper<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            has_more: false,
            quota_max: 300,
            quota_remaining: 299,
        }
    }
}

type Params = Query<HashMap<String, String>>;

pub fn app() -> Router {
    Router::new()
        .route("/2.2/filters/create", get(create_filter))
        .route("/2.2/questions", get(list_questions))
        .route("/2.2/questions/{ids}", get(questions_by_id))
        .route("/2.2/errors/{id}", get(simulate_error))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// A 400 with the API's error triple in the body.
fn bad_parameter(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error_id": 400,
            "error_name": "bad_parameter",
            "error_message": message,
        })),
    )
        .into_response()
}

fn split_list(raw: Option<&String>) -> Vec<String> {
    raw.map(|s| s.split(';').filter(|p| !p.is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

async fn create_filter(Query(params): Params) -> Response {
    let filter_type = match params.get("unsafe").map(String::as_str) {
        Some("true") => "unsafe",
        Some("false") => "safe",
        Some(_) => return bad_parameter("unsafe"),
        None => return bad_parameter("unsafe is required"),
    };
    let base = params.get("base").map(String::as_str).unwrap_or("default");
    if !BASE_FILTERS.contains(&base) {
        return bad_parameter("base");
    }
    let include = split_list(params.get("include"));
    let exclude = split_list(params.get("exclude"));

    let filter = if include.is_empty() && exclude.is_empty() {
        base.to_string()
    } else {
        format!("!{base}+{}-{}", include.join("+"), exclude.join("-"))
    };

    Json(Wrapper::new(vec![json!({
        "filter": filter,
        "filter_type": filter_type,
        "included_fields": include,
    })]))
    .into_response()
}

fn question(id: i64) -> Question {
    Question {
        question_id: id,
        title: format!("Question {id}"),
        tags: vec!["rust".to_string()],
        score: id % 7,
    }
}

async fn list_questions(Query(params): Params) -> Response {
    if !params.contains_key("site") {
        return bad_parameter("site is required");
    }
    let pagesize = match params.get("pagesize").map(|s| s.parse::<i64>()) {
        None => 30,
        Some(Ok(n)) if (0..=100).contains(&n) => n,
        Some(_) => return bad_parameter("pagesize"),
    };
    let items: Vec<Question> = (1..=pagesize).map(question).collect();
    Json(Wrapper::new(items)).into_response()
}

async fn questions_by_id(Path(ids): Path<String>, Query(params): Params) -> Response {
    if !params.contains_key("site") {
        return bad_parameter("site is required");
    }
    let mut items = Vec::new();
    for raw in ids.split(';') {
        match raw.parse::<i64>() {
            Ok(id) => items.push(question(id)),
            Err(_) => return bad_parameter("ids"),
        }
    }
    Json(Wrapper::new(items)).into_response()
}

/// Mirrors the real `errors/{id}` route: responds with the named error.
async fn simulate_error(Path(id): Path<u16>) -> Response {
    let status = StatusCode::from_u16(id).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json!({
        "error_id": id,
        "error_name": status.canonical_reason().unwrap_or("unknown").to_ascii_lowercase().replace(' ', "_"),
        "error_message": format!("simulated error {id}"),
    });
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_serializes_quota_fields() {
        let json = serde_json::to_value(Wrapper::new(vec![question(3)])).unwrap();
        assert_eq!(json["items"][0]["question_id"], 3);
        assert_eq!(json["has_more"], false);
        assert_eq!(json["quota_max"], 300);
    }

    #[test]
    fn split_list_drops_empty_segments() {
        let raw = "a;;b;".to_string();
        assert_eq!(split_list(Some(&raw)), vec!["a", "b"]);
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn question_is_deterministic() {
        let q = question(14);
        assert_eq!(q.title, "Question 14");
        assert_eq!(q.score, 0);
    }
}
