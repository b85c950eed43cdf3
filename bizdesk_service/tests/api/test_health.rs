use crate::common::test_server;
use bizdesk_service::api::health::HealthResponse;

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "bizdesk");
    assert!(body.timestamp.timestamp() > 0);
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let server = test_server();

    // no authorization header at all
    let response = server.get("/api/health").await;
    response.assert_status_ok();
}
