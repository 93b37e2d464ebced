//! Integration tests for the HTTP surface.
//!
//! These drive the real router with in-memory stores: the respondent
//! flow (begin, re-read, answer, submit) and the secret-gated admin
//! surface (results view, CSV export).

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

use style_compass::adapters::http::{api_router, ADMIN_SECRET_HEADER};
use style_compass::adapters::memory::{InMemoryResultLog, InMemorySessionStore};

const ADMIN_SECRET: &str = "admin234";

fn app() -> Router {
    api_router(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(InMemoryResultLog::new()),
        Secret::new(ADMIN_SECRET.to_string()),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_secret(uri: &str, secret: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(ADMIN_SECRET_HEADER, secret)
        .body(Body::empty())
        .unwrap()
}

async fn begin_session(app: &Router, name: &str) -> String {
    let (status, body) = send(app, post_json("/api/sessions", json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

async fn answer_all(app: &Router, session_id: &str, code: &str) {
    for position in 1..=14 {
        let (status, _) = send(
            app,
            put_json(
                &format!("/api/sessions/{session_id}/answers"),
                json!({ "position": position, "answer": code }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

// =============================================================================
// Respondent flow
// =============================================================================

#[tokio::test]
async fn begin_returns_fourteen_items_and_the_scale_legend() {
    let app = app();
    let (status, body) = send(&app, post_json("/api/sessions", json!({ "name": "Ana" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["items"].as_array().unwrap().len(), 14);
    assert_eq!(body["scale"].as_array().unwrap().len(), 5);
    assert_eq!(body["answered_count"], 0);
    assert_eq!(body["items"][0]["position"], 1);
    // Unanswered items carry no answer field at all
    assert!(body["items"][0].get("answer").is_none());
}

#[tokio::test]
async fn rereading_a_session_returns_the_same_item_order() {
    let app = app();
    let session_id = begin_session(&app, "Ana").await;

    let (status, first) = send(&app, get(&format!("/api/sessions/{session_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, get(&format!("/api/sessions/{session_id}"))).await;

    let texts = |v: &Value| -> Vec<String> {
        v["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["text"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(texts(&first), texts(&second));
}

#[tokio::test]
async fn full_neutral_run_is_balanced_with_chart_and_narrative() {
    let app = app();
    let session_id = begin_session(&app, "Budi").await;
    answer_all(&app, &session_id, "N").await;

    let (status, body) = send(
        &app,
        post_json(&format!("/api/sessions/{session_id}/submit"), json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rational_score"], 21);
    assert_eq!(body["intuitive_score"], 21);
    assert_eq!(body["dominant_style"], "balanced");
    assert_eq!(body["chart"]["bars"][0]["label"], "Rational");
    assert_eq!(body["chart"]["bars"][0]["value"], 21);
    assert_eq!(body["chart"]["bars"][1]["value"], 21);
    assert!(body["narrative"]["headline"].as_str().unwrap().contains("balance"));
}

#[tokio::test]
async fn answers_can_be_recorded_in_bulk() {
    let app = app();
    let session_id = begin_session(&app, "Ana").await;

    let batch: Vec<Value> = (1..=14)
        .map(|position| json!({ "position": position, "answer": "N" }))
        .collect();
    let (status, body) = send(
        &app,
        put_json(
            &format!("/api/sessions/{session_id}/answers"),
            json!({ "answers": batch }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answered_count"], 14);
}

#[tokio::test]
async fn bulk_with_a_bad_position_records_nothing() {
    let app = app();
    let session_id = begin_session(&app, "Ana").await;

    let (status, _) = send(
        &app,
        put_json(
            &format!("/api/sessions/{session_id}/answers"),
            json!({ "answers": [
                { "position": 1, "answer": "S" },
                { "position": 99, "answer": "S" },
            ] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get(&format!("/api/sessions/{session_id}"))).await;
    assert_eq!(body["answered_count"], 0);
}

#[tokio::test]
async fn submit_without_name_is_rejected() {
    let app = app();
    let session_id = begin_session(&app, "").await;
    answer_all(&app, &session_id, "S").await;

    let (status, body) = send(
        &app,
        post_json(&format!("/api/sessions/{session_id}/submit"), json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NAME_REQUIRED");
}

#[tokio::test]
async fn submit_with_missing_answers_enumerates_positions() {
    let app = app();
    let session_id = begin_session(&app, "Ana").await;
    // Answer only the first three positions
    for position in 1..=3 {
        send(
            &app,
            put_json(
                &format!("/api/sessions/{session_id}/answers"),
                json!({ "position": position, "answer": "SS" }),
            ),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        post_json(&format!("/api/sessions/{session_id}/submit"), json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INCOMPLETE");
    assert_eq!(body["missing_positions"].as_array().unwrap().len(), 11);
    assert_eq!(body["missing_positions"][0], 4);
}

#[tokio::test]
async fn unknown_session_is_404_and_bad_id_is_400() {
    let app = app();

    let (status, _) = send(
        &app,
        get("/api/sessions/00000000-0000-0000-0000-000000000000"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/sessions/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_scale_code_is_rejected() {
    let app = app();
    let session_id = begin_session(&app, "Ana").await;

    let (status, _) = send(
        &app,
        put_json(
            &format!("/api/sessions/{session_id}/answers"),
            json!({ "position": 1, "answer": "XX" }),
        ),
    )
    .await;

    // Serde rejects the unknown code before the handler runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Admin surface
// =============================================================================

#[tokio::test]
async fn admin_without_secret_is_401_and_wrong_secret_is_403() {
    let app = app();

    let (status, _) = send(&app, get("/api/admin/results")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, get_with_secret("/api/admin/results", "wrong")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "SECRET_INVALID");
}

#[tokio::test]
async fn admin_results_reflect_submissions_in_order() {
    let app = app();

    for name in ["Ana", "Budi"] {
        let session_id = begin_session(&app, name).await;
        answer_all(&app, &session_id, "N").await;
        let (status, _) = send(
            &app,
            post_json(&format!("/api/sessions/{session_id}/submit"), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, get_with_secret("/api/admin/results", ADMIN_SECRET)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["has_data"], true);
    assert_eq!(body["rows"][0]["name"], "Ana");
    assert_eq!(body["rows"][1]["name"], "Budi");
}

#[tokio::test]
async fn admin_export_downloads_csv_with_header_row() {
    let app = app();
    let session_id = begin_session(&app, "Ana").await;
    answer_all(&app, &session_id, "SS").await;
    send(
        &app,
        post_json(&format!("/api/sessions/{session_id}/submit"), json!({})),
    )
    .await;

    let response = app
        .clone()
        .oneshot(get_with_secret("/api/admin/export", ADMIN_SECRET))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("decision_style_results.csv"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Name,TestDate,Email,Rational_Score,Intuitive_Score,Dominant_Style"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Ana,"));
}

#[tokio::test]
async fn empty_log_reports_no_data() {
    let app = app();
    let (status, body) = send(&app, get_with_secret("/api/admin/results", ADMIN_SECRET)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_data"], false);
    assert_eq!(body["total"], 0);
}
