use super::*;
use crate::api::{DATA_SIZE_STATS_PATH, TOP_PROFESSORS_PATH};
use crate::api::types::{DataSizeStats, Stat, TopProfessor};
use crate::test_helpers::{spawn_stub, unreachable_client};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

fn size_stats_json() -> serde_json::Value {
    serde_json::json!({
        "total_professors": 40,
        "total_publications": 1200,
        "total_citations": 56000,
        "average_publications_per_professor": 30.0,
        "average_citations_per_publication": 46.7
    })
}

// =========================================================================
// fetch
// =========================================================================

#[tokio::test]
async fn fetch_returns_body_unchanged_on_200() {
    let body = size_stats_json();
    let expected = body.clone();
    let client = spawn_stub(Router::new().route(
        DATA_SIZE_STATS_PATH,
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    ))
    .await;

    let value = client.fetch(DATA_SIZE_STATS_PATH).await;
    assert_eq!(value, Some(expected));
}

#[tokio::test]
async fn fetch_returns_none_on_server_error() {
    let client = spawn_stub(Router::new().route(
        DATA_SIZE_STATS_PATH,
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    assert!(client.fetch(DATA_SIZE_STATS_PATH).await.is_none());
}

#[tokio::test]
async fn fetch_treats_other_success_codes_as_absence() {
    let client = spawn_stub(Router::new().route(
        DATA_SIZE_STATS_PATH,
        get(|| async { (StatusCode::CREATED, Json(size_stats_json())) }),
    ))
    .await;

    assert!(client.fetch(DATA_SIZE_STATS_PATH).await.is_none());
}

#[tokio::test]
async fn fetch_returns_none_on_unknown_route() {
    let client = spawn_stub(Router::new()).await;
    assert!(client.fetch("/does/not/exist").await.is_none());
}

#[tokio::test]
async fn fetch_returns_none_on_malformed_json() {
    let client = spawn_stub(Router::new().route(DATA_SIZE_STATS_PATH, get(|| async { "not json" }))).await;
    assert!(client.fetch(DATA_SIZE_STATS_PATH).await.is_none());
}

#[tokio::test]
async fn fetch_returns_none_when_unreachable() {
    let client = unreachable_client().await;
    assert!(client.fetch(DATA_SIZE_STATS_PATH).await.is_none());
}

#[tokio::test]
async fn fetch_as_decodes_typed_records() {
    let client = spawn_stub(Router::new().route(
        TOP_PROFESSORS_PATH,
        get(|| async {
            Json(serde_json::json!([
                { "name": "Ada", "total_citations": 900, "h_index": 12, "affiliation": "AES" }
            ]))
        }),
    ))
    .await;

    let top: Vec<TopProfessor> = client.fetch_as(TOP_PROFESSORS_PATH).await.unwrap();
    assert_eq!(top[0].h_index, Stat::new(12.0));
    assert_eq!(top[0].extra["affiliation"], "AES");
}

#[tokio::test]
async fn fetch_as_accepts_float_counts() {
    let client = spawn_stub(Router::new().route(
        DATA_SIZE_STATS_PATH,
        get(|| async {
            let mut body = size_stats_json();
            body["total_professors"] = serde_json::json!(40.0);
            Json(body)
        }),
    ))
    .await;

    let stats = client.fetch_as::<DataSizeStats>(DATA_SIZE_STATS_PATH).await.unwrap();
    assert_eq!(stats.total_professors, Stat::new(40.0));
    assert_eq!(stats.total_professors.to_string(), "40");
}

#[tokio::test]
async fn fetch_as_keeps_rows_with_null_values() {
    let client = spawn_stub(Router::new().route(
        TOP_PROFESSORS_PATH,
        get(|| async {
            Json(serde_json::json!([
                { "name": "Ada", "total_citations": 900, "h_index": null },
                { "name": "Alan", "total_citations": 800, "h_index": 10 }
            ]))
        }),
    ))
    .await;

    let top: Vec<TopProfessor> = client.fetch_as(TOP_PROFESSORS_PATH).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].h_index, Stat(None));
    assert!(top[0].extra.is_empty());
}

#[tokio::test]
async fn fetch_as_missing_key_is_absence() {
    let client = spawn_stub(Router::new().route(
        DATA_SIZE_STATS_PATH,
        get(|| async { Json(serde_json::json!({ "total_professors": 3 })) }),
    ))
    .await;

    assert!(client.fetch_as::<DataSizeStats>(DATA_SIZE_STATS_PATH).await.is_none());
}

// =========================================================================
// GraphQL
// =========================================================================

async fn graphql_handler(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    let query = body["query"].as_str().unwrap_or_default();
    if query.contains("allProfessors") {
        return Json(serde_json::json!({ "data": { "allProfessors": [
            { "id": 7, "name": "Grace Hopper", "scholarId": "gh7" }
        ]}}));
    }
    match body["variables"]["id"].as_i64() {
        Some(7) => Json(serde_json::json!({ "data": { "professor": {
            "name": "Grace Hopper",
            "affiliation": "Navy",
            "hindex": 30,
            "totalCitations": 12000,
            "scholarId": "gh7",
            "publications": [
                { "title": "COBOL", "year": 1959, "numCitations": 500 }
            ]
        }}})),
        Some(_) => Json(serde_json::json!({ "data": { "professor": null } })),
        None => Json(serde_json::json!({ "errors": [{ "message": "Variable \"$id\" missing" }] })),
    }
}

#[tokio::test]
async fn fetch_all_professors_unwraps_data_field() {
    let client = spawn_stub(Router::new().route(GRAPHQL_PATH, post(graphql_handler))).await;

    let list = client.fetch_all_professors().await.unwrap();
    assert_eq!(list, vec![ProfessorSummary { id: 7, name: "Grace Hopper".into(), scholar_id: "gh7".into() }]);
}

#[tokio::test]
async fn fetch_professor_sends_id_variable() {
    let client = spawn_stub(Router::new().route(GRAPHQL_PATH, post(graphql_handler))).await;

    let detail = client.fetch_professor(7).await.unwrap();
    assert_eq!(detail.name, "Grace Hopper");
    assert_eq!(detail.publications.len(), 1);
}

#[tokio::test]
async fn fetch_professor_unknown_id_is_absence() {
    let client = spawn_stub(Router::new().route(GRAPHQL_PATH, post(graphql_handler))).await;
    assert!(client.fetch_professor(99).await.is_none());
}

#[tokio::test]
async fn graphql_errors_in_200_are_absence() {
    let client = spawn_stub(Router::new().route(
        GRAPHQL_PATH,
        post(|| async { Json(serde_json::json!({ "errors": [{ "message": "resolver exploded" }] })) }),
    ))
    .await;

    assert!(client.fetch_all_professors().await.is_none());
}

#[tokio::test]
async fn graphql_non_200_is_absence() {
    let client = spawn_stub(Router::new().route(
        GRAPHQL_PATH,
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    ))
    .await;

    assert!(client.fetch_all_professors().await.is_none());
}

// =========================================================================
// chat
// =========================================================================

async fn chat_handler(
    Path(key): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let question = body["question"].as_str().unwrap_or_default();
    Json(serde_json::json!({ "answer": format!("{key}: {question}") }))
}

#[tokio::test]
async fn chat_posts_question_and_returns_answer() {
    let client = spawn_stub(Router::new().route("/chat/{key}", post(chat_handler))).await;

    let answer = client.chat("gh7", "What is COBOL?").await;
    assert_eq!(answer, "gh7: What is COBOL?");
}

#[tokio::test]
async fn chat_server_error_becomes_reply_text() {
    let client = spawn_stub(Router::new().route(
        "/chat/{key}",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "inference failed") }),
    ))
    .await;

    let answer = client.chat("gh7", "hello").await;
    assert!(answer.starts_with("An error occurred:"));
    assert!(answer.contains("500"));
}

#[tokio::test]
async fn chat_transport_failure_becomes_reply_text() {
    let client = unreachable_client().await;

    let answer = client.chat("gh7", "hello").await;
    assert!(!answer.is_empty());
    assert!(answer.starts_with("An error occurred: request failed"));
}

#[tokio::test]
async fn chat_missing_answer_key_becomes_reply_text() {
    let client = spawn_stub(Router::new().route(
        "/chat/{key}",
        post(|| async { Json(serde_json::json!({ "reply": "wrong key" })) }),
    ))
    .await;

    let answer = client.chat("gh7", "hello").await;
    assert!(answer.starts_with("An error occurred: response parse failed"));
}

#[test]
fn error_reply_names_status() {
    let reply = error_reply(&ApiError::Status { status: 404, body: String::new() });
    assert_eq!(reply, "An error occurred: unexpected status 404");
}
