use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::{TestRequest, TestServer};
use bizdesk_service::api::{app, context::ApiContext};
use chrono::Utc;
use models_bizdesk::client::request::{CreateClientRequest, CreateClientRequestBuilder};
use models_bizdesk::target::request::{CreateTargetRequest, CreateTargetRequestBuilder};
use models_bizdesk::target::{TargetPeriod, TargetType};
use models_bizdesk::transaction::request::{
    CreateTransactionRequest, CreateTransactionRequestBuilder,
};
use models_bizdesk::transaction::{TransactionStatus, TransactionType};

/// The bearer token the testing context accepts
pub const TEST_TOKEN: &str = "test-token";

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A server over the full app wired to a lazy pool: auth, health and
/// rejection paths are reachable without a database
pub fn test_server() -> TestServer {
    TestServer::new(app(ApiContext::new_testing())).unwrap()
}

pub fn authorized(request: TestRequest) -> TestRequest {
    request.add_header(
        AUTHORIZATION,
        HeaderValue::from_static("Bearer test-token"),
    )
}

pub fn create_test_client_request() -> CreateClientRequest {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    CreateClientRequestBuilder::default()
        .name(format!("Client {n}"))
        .email(format!("client{n}@example.test"))
        .company(Some(format!("Company {n}")))
        .build()
        .unwrap()
}

pub fn create_test_transaction_request(
    transaction_type: TransactionType,
    amount: f64,
    status: TransactionStatus,
) -> CreateTransactionRequest {
    CreateTransactionRequestBuilder::default()
        .transaction_type(transaction_type)
        .category("Consulting")
        .amount(amount)
        .date(Some(Utc::now()))
        .status(status)
        .build()
        .unwrap()
}

pub fn create_test_target_request(target_value: f64, current_value: f64) -> CreateTargetRequest {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    CreateTargetRequestBuilder::default()
        .name(format!("Target {n}"))
        .target_type(TargetType::Revenue)
        .target_value(target_value)
        .current_value(current_value)
        .period(TargetPeriod::Monthly)
        .start_date(Utc::now())
        .end_date(Utc::now())
        .build()
        .unwrap()
}
