use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mindcare_api::state::AppState;
use mindcare_instruments::scoring::{ScoreBand, Severity};
use mindcare_instruments::{Catalog, Instrument};

fn standard_app() -> Router {
    mindcare_api::app(AppState::new(Catalog::standard().unwrap(), 100))
}

fn tiny_app(max_sessions: usize) -> Router {
    let tiny = Instrument::new(
        "tiny",
        "Tiny",
        "Test",
        &["One?", "Two?"],
        vec![
            ScoreBand::upto(2, "Low", Severity::Minimal),
            ScoreBand::above("High", Severity::Severe),
        ],
    );
    mindcare_api::app(AppState::new(Catalog::new(vec![tiny]).unwrap(), max_sessions))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn start(app: &Router, instrument_id: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/sessions",
        Some(json!({ "instrument_id": instrument_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["session_id"].as_str().unwrap().to_string()
}

async fn answer(app: &Router, id: &str, value: u8) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/sessions/{id}/answers"),
        Some(json!({ "value": value })),
    )
    .await
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&standard_app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_instruments_in_catalog_order() {
    let (status, body) = send(&standard_app(), Method::GET, "/instruments", None).await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 11);
    assert_eq!(list[0]["id"], "phq9");
    assert_eq!(list[0]["category"], "Depresi");
    assert_eq!(list[0]["max_score"], 27);
    assert_eq!(list[4]["category"], "Kecemasan");
}

#[tokio::test]
async fn groups_instruments_by_category() {
    let (status, body) = send(&standard_app(), Method::GET, "/instruments/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["category"], "Depresi");
    assert_eq!(body[0]["instruments"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn instrument_detail_includes_questions_and_scale() {
    let (status, body) = send(&standard_app(), Method::GET, "/instruments/gad7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 7);
    assert_eq!(body["answer_scale"].as_array().unwrap().len(), 4);
    assert_eq!(body["bands"][0]["upper"], 4);
    assert_eq!(body["bands"][3]["upper"], Value::Null);
}

#[tokio::test]
async fn unknown_instrument_is_404() {
    let app = standard_app();
    let (status, body) = send(&app, Method::GET, "/instruments/nonexistent-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "instrument not found: nonexistent-id");

    let (status, _) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({ "instrument_id": "nonexistent-id" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_phq9_walkthrough() {
    let app = standard_app();
    let id = start(&app, "phq9").await;

    for i in 0..9u64 {
        let (status, view) = answer(&app, &id, 3).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["current_index"], i + 1);
    }

    let (status, view) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["completed"], true);
    assert_eq!(view["progress_percent"], 100);
    assert_eq!(view["current_question"], Value::Null);

    let (status, result) = send(&app, Method::GET, &format!("/sessions/{id}/result"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_score"], 27);
    assert_eq!(result["label"], "Depresi berat");
    assert_eq!(result["severity"], "severe");
    assert_eq!(result["percentage"], 100);
}

#[tokio::test]
async fn invalid_answer_is_400_and_leaves_session_unchanged() {
    let app = tiny_app(10);
    let id = start(&app, "tiny").await;
    answer(&app, &id, 1).await;

    let (status, body) = answer(&app, &id, 5).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid answer 5"));

    let (_, view) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(view["current_index"], 1);
    assert_eq!(view["current_question"], "Two?");
}

#[tokio::test]
async fn result_before_completion_is_409() {
    let app = tiny_app(10);
    let id = start(&app, "tiny").await;
    answer(&app, &id, 3).await;

    let (status, body) = send(&app, Method::GET, &format!("/sessions/{id}/result"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "session not complete: 1 of 2 questions answered"
    );
}

#[tokio::test]
async fn answering_a_completed_session_is_409() {
    let app = tiny_app(10);
    let id = start(&app, "tiny").await;
    answer(&app, &id, 0).await;
    answer(&app, &id, 0).await;

    let (status, _) = answer(&app, &id, 0).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn reset_returns_to_first_question() {
    let app = tiny_app(10);
    let id = start(&app, "tiny").await;
    answer(&app, &id, 2).await;
    answer(&app, &id, 2).await;

    let (status, view) = send(&app, Method::POST, &format!("/sessions/{id}/reset"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["current_index"], 0);
    assert_eq!(view["completed"], false);
    assert_eq!(view["current_question"], "One?");
}

#[tokio::test]
async fn deleted_session_is_gone() {
    let app = tiny_app(10);
    let id = start(&app, "tiny").await;

    let (status, _) = send(&app, Method::DELETE, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_cap_is_enforced() {
    let app = tiny_app(1);
    start(&app, "tiny").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({ "instrument_id": "tiny" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
