use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use titlecheck::{Policy, SqliteTitleStore, Status, VerificationResult, Verifier};
use titlecheck_server::{AppState, router};
use tower::ServiceExt;

const POOL: [&str; 4] = ["The Hindu", "Times of India", "Indian Express", "Namaskar"];

fn app_with(titles: &[&str], policy: Policy) -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteTitleStore::open(dir.path().join("titles.db")).unwrap();
    store.add_titles(titles).unwrap();
    let app = router(AppState::new(store, Verifier::new(policy)));
    (dir, app)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn verify(app: Router, title: &str) -> VerificationResult {
    let (status, body) = get(app, &format!("/verify?title={title}")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn homophone_is_rejected() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let result = verify(app, "Namascar").await;

    assert_eq!(result.status, Status::Rejected);
    assert!(result.similarity >= 90);
    assert!(result.probability <= 10);
    assert!(result.reason.contains("Namaskar"));
}

#[tokio::test]
async fn restricted_word_is_rejected() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let result = verify(app, "Police%20Gazette").await;

    assert_eq!(result.status, Status::Rejected);
    assert_eq!(result.probability, 0);
    assert_eq!(result.reason, "Restricted word detected.");
}

#[tokio::test]
async fn unrelated_title_is_accepted() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let result = verify(app, "Quantum%20Falcon%20Weekly").await;

    assert_eq!(result.status, Status::Accepted);
    assert!(result.probability >= 50);
    assert_eq!(result.reason, "Title is unique!");
}

#[tokio::test]
async fn response_uses_wire_field_names() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let (_, body) = get(app, "/verify?title=The+Hindu").await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "Rejected");
    assert_eq!(json["probability"], 0);
    assert_eq!(json["similarity"], 100);
    assert_eq!(json["reason"], "Too similar to 'The Hindu'");
}

#[tokio::test]
async fn empty_store_uses_fallback_only_when_enabled() {
    let (_dir, app) = app_with(&[], Policy::default());
    let result = verify(app, "Namascar").await;
    assert_eq!(result.status, Status::Accepted);
    assert_eq!(result.probability, 100);

    let (_dir, app) = app_with(&[], Policy::default().with_fallback(true));
    let result = verify(app, "Namascar").await;
    assert_eq!(result.status, Status::Rejected);
}

#[tokio::test]
async fn missing_title_is_bad_request() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let (status, _) = get(app, "/verify").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_title_is_scored() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let result = verify(app, "").await;
    assert_eq!(result.status, Status::Accepted);
}

#[tokio::test]
async fn storage_fault_is_server_error() {
    let (dir, app) = app_with(&POOL, Policy::default());
    drop(dir);

    let (status, body) = get(app.clone(), "/verify?title=Morning%20Herald").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "internal server error");

    // Denylist rejections never read the store.
    let result = verify(app, "Army%20Times").await;
    assert_eq!(result.probability, 0);
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let (_dir, app) = app_with(&POOL, Policy::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/verify?title=Namaskar")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let (_dir, app) = app_with(&[], Policy::default());
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
