//! Aggregation behavior against a live database.
//!
//! Skipped by default because you have to spin up a Postgres.
//! Run with: `cargo test -- --ignored`

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use crate::common::{authorized, create_test_client_request, create_test_transaction_request};
use crate::db::server_with_pool;
use models_bizdesk::transaction::{TransactionStatus, TransactionType};

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_finance_summary_counts_completed_income(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let completed = create_test_transaction_request(
        TransactionType::Income,
        5000.0,
        TransactionStatus::Completed,
    );
    authorized(server.post("/api/finance"))
        .json(&completed)
        .await
        .assert_status(StatusCode::CREATED);

    // pending income must not count towards the summary
    let pending = create_test_transaction_request(
        TransactionType::Income,
        900.0,
        TransactionStatus::Pending,
    );
    authorized(server.post("/api/finance"))
        .json(&pending)
        .await
        .assert_status(StatusCode::CREATED);

    let response = authorized(server.get("/api/finance/summary/stats")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert!(body["summary"]["totalIncome"].as_f64().unwrap() >= 5000.0);
    assert!(body["summary"]["totalIncome"].as_f64().unwrap() < 5900.0);

    let consulting = body["incomeByCategory"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["_id"] == "Consulting")
        .expect("Consulting bucket present");
    assert!(consulting["total"].as_f64().unwrap() >= 5000.0);
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_dashboard_snapshot_shape(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    authorized(server.post("/api/clients"))
        .json(&create_test_client_request())
        .await
        .assert_status(StatusCode::CREATED);

    let income = create_test_transaction_request(
        TransactionType::Income,
        4000.0,
        TransactionStatus::Completed,
    );
    authorized(server.post("/api/finance"))
        .json(&income)
        .await
        .assert_status(StatusCode::CREATED);
    let expense = create_test_transaction_request(
        TransactionType::Expense,
        1500.0,
        TransactionStatus::Completed,
    );
    authorized(server.post("/api/finance"))
        .json(&expense)
        .await
        .assert_status(StatusCode::CREATED);

    let response = authorized(server.get("/api/dashboard/stats")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["financial"]["monthlyIncome"], json!(4000.0));
    assert_eq!(body["financial"]["monthlyExpense"], json!(1500.0));
    assert_eq!(body["financial"]["monthlyProfit"], json!(2500.0));
    assert_eq!(body["clients"]["total"], json!(1));
    assert_eq!(body["clients"]["active"], json!(1));
    assert_eq!(body["projects"]["total"], json!(0));
    assert!(body["recentTransactions"].as_array().unwrap().len() <= 10);
    assert!(body["activeTargets"].as_array().unwrap().len() <= 5);
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_monthly_trend_has_no_empty_buckets(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    // one completed income this month; cancelled income must not create a bucket
    let completed = create_test_transaction_request(
        TransactionType::Income,
        2500.0,
        TransactionStatus::Completed,
    );
    authorized(server.post("/api/finance"))
        .json(&completed)
        .await
        .assert_status(StatusCode::CREATED);
    let cancelled = create_test_transaction_request(
        TransactionType::Income,
        99.0,
        TransactionStatus::Cancelled,
    );
    authorized(server.post("/api/finance"))
        .json(&cancelled)
        .await
        .assert_status(StatusCode::CREATED);

    let body: serde_json::Value = authorized(server.get("/api/dashboard/stats")).await.json();
    let trend = body["monthlyTrend"].as_array().unwrap();

    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0]["total"], json!(2500.0));

    // buckets are (year, month) ascending with nothing zero-valued
    let mut previous: Option<(i64, i64)> = None;
    for bucket in trend {
        let key = (
            bucket["year"].as_i64().unwrap(),
            bucket["month"].as_i64().unwrap(),
        );
        if let Some(previous) = previous {
            assert!(key > previous);
        }
        assert!(bucket["total"].as_f64().unwrap() > 0.0);
        previous = Some(key);
    }
    Ok(())
}
