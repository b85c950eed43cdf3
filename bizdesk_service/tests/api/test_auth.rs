use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};

use crate::common::test_server;

#[tokio::test]
async fn test_data_routes_reject_missing_token() {
    let server = test_server();

    for path in [
        "/api/clients",
        "/api/projects",
        "/api/finance",
        "/api/targets",
        "/api/documents",
        "/api/dashboard/stats",
        "/api/finance/summary/stats",
    ] {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "expected 401 for {path}"
        );

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "unauthorized", "error envelope for {path}");
    }
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let server = test_server();

    let response = server
        .get("/api/clients")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer nope"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_authorization_scheme_is_rejected() {
    let server = test_server();

    let response = server
        .get("/api/clients")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
