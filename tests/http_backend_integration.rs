//! Integration tests for the HTTP analysis backend.
//!
//! These tests run the reqwest adapter against an in-process axum stub of
//! the analysis service and verify:
//! 1. The request body carries the four form fields as JSON
//! 2. Success bodies parse with impact order preserved
//! 3. Status, parse, transport, and timeout failures map to distinct errors

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use micro_decision::adapters::{HttpAnalysisBackend, HttpBackendConfig};
use micro_decision::domain::analysis::{
    AnalysisRequest, ButterflyIntensity, FormState, RenderedAnalysis, TextTarget,
};
use micro_decision::ports::{AnalysisBackend, BackendError};

// =============================================================================
// Test Infrastructure
// =============================================================================

type Captured = Arc<Mutex<Vec<Value>>>;

/// Success body as raw text; `json!` would sort the impact keys.
const SUCCESS_BODY: &str = r#"{
    "decision": "D1",
    "capability_percent": 40,
    "capability_score": 55,
    "advice": "Fix your sleep first",
    "pattern": "Negative Habit Loop (Compounding Loss)",
    "explanation": "Sleeping late slightly reduces sleep quality.",
    "butterfly_intensity": -540,
    "butterfly_effect": { "health": -3, "focus": -4, "career": -2 }
}"#;

fn json_text(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn analyze_ok(
    State(captured): State<Captured>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    captured.lock().unwrap().push(body);
    json_text(SUCCESS_BODY)
}

async fn analyze_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn analyze_malformed() -> impl IntoResponse {
    json_text("{\"advice\": ")
}

async fn analyze_slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(2)).await;
    json_text(SUCCESS_BODY)
}

async fn home() -> Json<Value> {
    Json(json!({
        "status": "Backend running",
        "message": "Micro Decision Taker API is live"
    }))
}

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn ok_stub() -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/", get(home))
        .route("/analyze", post(analyze_ok))
        .with_state(captured.clone());
    (spawn_stub(router).await, captured)
}

fn backend(base_url: &str) -> HttpAnalysisBackend {
    HttpAnalysisBackend::new(HttpBackendConfig::new(base_url)).unwrap()
}

fn request() -> AnalysisRequest {
    FormState::new("D1", "2", "30", "Pilot").to_request().unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn posts_form_fields_as_json_body() {
    let (base_url, captured) = ok_stub().await;

    backend(&base_url).analyze(&request()).await.unwrap();

    let bodies = captured.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "decision_id": "D1",
            "frequency": "2",
            "time_period": "30",
            "dream_job": "Pilot"
        })
    );
}

#[tokio::test]
async fn parses_success_body_in_backend_order() {
    let (base_url, _) = ok_stub().await;

    let response = backend(&base_url).analyze(&request()).await.unwrap();

    assert_eq!(response.advice, "Fix your sleep first");
    assert_eq!(
        response.butterfly_intensity,
        ButterflyIntensity::Number((-540).into())
    );
    let keys: Vec<&str> = response.butterfly_effect.keys().collect();
    assert_eq!(keys, vec!["health", "focus", "career"]);

    let rendered = RenderedAnalysis::from_response(&response);
    assert_eq!(rendered.chart.labels, vec!["health", "focus", "career"]);
    assert_eq!(
        rendered.text(TextTarget::Impact),
        "HEALTH: -3  FOCUS: -4  CAREER: -2  "
    );
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let base_url = spawn_stub(Router::new().route("/analyze", post(analyze_error))).await;

    let result = backend(&base_url).analyze(&request()).await;

    assert_eq!(result, Err(BackendError::status(500, "boom")));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let base_url = spawn_stub(Router::new().route("/analyze", post(analyze_malformed))).await;

    let result = backend(&base_url).analyze(&request()).await;

    assert!(matches!(result, Err(BackendError::Parse(_))), "{result:?}");
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = backend(&format!("http://127.0.0.1:{port}"))
        .analyze(&request())
        .await;

    assert!(matches!(result, Err(BackendError::Network(_))), "{result:?}");
}

#[tokio::test]
async fn configured_timeout_cuts_off_slow_backend() {
    let base_url = spawn_stub(Router::new().route("/analyze", post(analyze_slow))).await;
    let backend = HttpAnalysisBackend::new(
        HttpBackendConfig::new(base_url).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let result = backend.analyze(&request()).await;

    assert!(matches!(result, Err(BackendError::Timeout { .. })), "{result:?}");
}

#[tokio::test]
async fn status_reads_liveness_body() {
    let (base_url, _) = ok_stub().await;

    let status = backend(&base_url).status().await.unwrap();

    assert_eq!(status.status, "Backend running");
    assert_eq!(status.message, "Micro Decision Taker API is live");
}
