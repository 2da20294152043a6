//! Admin, health and file server integration tests

mod common;

use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;

use common::TestApp;

fn hits_line(html: &str) -> &str {
    html.lines()
        .find(|line| line.contains("visited"))
        .unwrap_or_default()
}

#[tokio::test]
async fn test_healthz() {
    let app = TestApp::new();

    let response = app.get("/api/healthz").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
    assert_eq!(
        response.headers[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn test_file_server_serves_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
    std::fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    let app = TestApp::with_static_dir(dir.path());

    let response = app.get("/app/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Welcome to Chirpy"));

    let response = app.get("/app/logo.png").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, vec![0x89, b'P', b'N', b'G']);

    let response = app.get("/app/missing.txt").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_app_root_serves_index_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
    let app = TestApp::with_static_dir(dir.path());

    let response = app.get("/app/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "<h1>Welcome to Chirpy</h1>");
    assert_eq!(app.state.file_server_hits.get(), 1);

    app.get("/app").await;
    app.get("/app/index.html").await;
    app.get("/app/missing.txt").await;
    assert_eq!(app.state.file_server_hits.get(), 4);
}

#[tokio::test]
async fn test_assets_listing() {
    let app = TestApp::new();

    let response = app.get("/app/assets").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains(r#"<a href="logo.png">logo.png</a>"#));
}

#[tokio::test]
async fn test_metrics_count_file_server_hits() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "hello").unwrap();
    let app = TestApp::with_static_dir(dir.path());

    let response = app.get("/admin/metrics").await;
    assert_eq!(hits_line(&response.text()), "<p>Chirpy has been visited 0 times!</p>");

    for _ in 0..3 {
        app.get("/app/").await;
    }
    // API requests are not counted
    app.get("/api/healthz").await;

    let response = app.get("/admin/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Welcome, Chirpy Admin"));
    assert_eq!(hits_line(&response.text()), "<p>Chirpy has been visited 3 times!</p>");
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let app = TestApp::new();
    let user = app.create_unique_test_user().await;
    app.post_chirp(Some(user.token.as_str()), "soon gone").await;
    app.get("/app/assets").await;
    assert_eq!(app.state.file_server_hits.get(), 1);

    let response = app.request(Method::POST, "/admin/reset", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(app.get("/api/chirps").await.json(), serde_json::json!([]));
    assert_eq!(app.state.file_server_hits.get(), 0);

    let response = app.login(&user.email, &user.password).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.register(&user.email, &user.password).await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_reset_requires_post() {
    let app = TestApp::new();
    let response = app.get("/admin/reset").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();
    let response = app.get("/api/nothing-here").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
