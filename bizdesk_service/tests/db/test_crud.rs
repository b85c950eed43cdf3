//! End-to-end CRUD flows against a live database.
//!
//! Skipped by default because you have to spin up a Postgres.
//! Run with: `cargo test -- --ignored`

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::common::{authorized, create_test_client_request, create_test_target_request};
use crate::db::server_with_pool;

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_client_crud_round_trip(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let request = create_test_client_request();
    let create = authorized(server.post("/api/clients")).json(&request).await;
    create.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = create.json();
    assert_eq!(created["message"], "Client created successfully");
    let id = created["client"]["id"].as_str().unwrap().to_string();

    let get = authorized(server.get(&format!("/api/clients/{id}"))).await;
    get.assert_status_ok();
    let fetched: serde_json::Value = get.json();
    assert_eq!(fetched["client"]["name"], created["client"]["name"]);

    // merge-replace: only status changes, everything else stays
    let update = authorized(server.put(&format!("/api/clients/{id}")))
        .json(&json!({"status": "inactive"}))
        .await;
    update.assert_status_ok();
    let updated: serde_json::Value = update.json();
    assert_eq!(updated["client"]["status"], "inactive");
    assert_eq!(updated["client"]["email"], created["client"]["email"]);

    let delete = authorized(server.delete(&format!("/api/clients/{id}"))).await;
    delete.assert_status_ok();

    let gone = authorized(server.get(&format!("/api/clients/{id}"))).await;
    gone.assert_status(StatusCode::NOT_FOUND);
    let error: serde_json::Value = gone.json();
    assert_eq!(error["error"], "Client not found");
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_unfiltered_list_is_a_superset(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    for status in ["active", "inactive", "pending"] {
        let mut request = serde_json::to_value(create_test_client_request()).unwrap();
        request["status"] = json!(status);
        authorized(server.post("/api/clients"))
            .json(&request)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let all: serde_json::Value = authorized(server.get("/api/clients")).await.json();
    let filtered: serde_json::Value = authorized(server.get("/api/clients"))
        .add_query_param("status", "pending")
        .await
        .json();

    let all_ids: Vec<&str> = all["clients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    let filtered_ids: Vec<&str> = filtered["clients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();

    assert_eq!(filtered_ids.len(), 1);
    assert_eq!(all_ids.len(), 3);
    for id in filtered_ids {
        assert!(all_ids.contains(&id));
    }
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_deleting_a_client_never_cascades(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let client: serde_json::Value = authorized(server.post("/api/clients"))
        .json(&create_test_client_request())
        .await
        .json();
    let client_id = client["client"]["id"].as_str().unwrap().to_string();

    let project: serde_json::Value = authorized(server.post("/api/projects"))
        .json(&json!({
            "name": "Website revamp",
            "client": client_id,
            "startDate": Utc::now(),
        }))
        .await
        .json();
    let project_id = project["project"]["id"].as_str().unwrap().to_string();

    authorized(server.delete(&format!("/api/clients/{client_id}")))
        .await
        .assert_status_ok();

    // the project survives; its client reference now resolves to nothing
    let fetched = authorized(server.get(&format!("/api/projects/{project_id}"))).await;
    fetched.assert_status_ok();
    let fetched: serde_json::Value = fetched.json();
    assert!(fetched["project"]["client"].is_null());
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_add_task_assigns_fresh_scoped_identity(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let client: serde_json::Value = authorized(server.post("/api/clients"))
        .json(&create_test_client_request())
        .await
        .json();
    let project: serde_json::Value = authorized(server.post("/api/projects"))
        .json(&json!({
            "name": "Launch",
            "client": client["client"]["id"],
            "startDate": Utc::now(),
        }))
        .await
        .json();
    let project_id = project["project"]["id"].as_str().unwrap().to_string();

    let first = authorized(server.post(&format!("/api/projects/{project_id}/tasks")))
        .json(&json!({"title": "Draft copy"}))
        .await;
    first.assert_status(StatusCode::CREATED);

    let second = authorized(server.post(&format!("/api/projects/{project_id}/tasks")))
        .json(&json!({"title": "Review copy"}))
        .await;
    second.assert_status(StatusCode::CREATED);

    let fetched: serde_json::Value =
        authorized(server.get(&format!("/api/projects/{project_id}")))
            .await
            .json();
    let tasks = fetched["project"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_ne!(tasks[0]["id"], tasks[1]["id"]);

    // update one task by its scoped identity
    let task_id = tasks[0]["id"].as_str().unwrap();
    let updated = authorized(
        server.put(&format!("/api/projects/{project_id}/tasks/{task_id}")),
    )
    .json(&json!({"status": "completed"}))
    .await;
    updated.assert_status_ok();

    // deleting a task that is not there is NotFound, not a silent no-op
    let missing = authorized(server.delete(&format!(
        "/api/projects/{project_id}/tasks/00000000-0000-0000-0000-000000000000"
    )))
    .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_project_without_end_date_stays_ongoing(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let client: serde_json::Value = authorized(server.post("/api/clients"))
        .json(&create_test_client_request())
        .await
        .json();
    let created: serde_json::Value = authorized(server.post("/api/projects"))
        .json(&json!({
            "name": "Retainer",
            "client": client["client"]["id"],
            "startDate": Utc::now(),
        }))
        .await
        .json();
    let id = created["project"]["id"].as_str().unwrap();

    let fetched = authorized(server.get(&format!("/api/projects/{id}"))).await;
    fetched.assert_status_ok();
    let fetched: serde_json::Value = fetched.json();
    assert!(fetched["project"]["endDate"].is_null());
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_target_progress_invariant(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let created = authorized(server.post("/api/targets"))
        .json(&create_test_target_request(20000.0, 5000.0))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = created.json();
    assert_eq!(created["target"]["progress"], 25.0);
    let id = created["target"]["id"].as_str().unwrap().to_string();

    // progress caps at 100 and status stays put
    let updated: serde_json::Value = authorized(server.put(&format!("/api/targets/{id}")))
        .json(&json!({"currentValue": 50000.0}))
        .await
        .json();
    assert_eq!(updated["target"]["progress"], 100.0);
    assert_eq!(updated["target"]["status"], "active");

    // zero target value leaves the prior progress alone
    let updated: serde_json::Value = authorized(server.put(&format!("/api/targets/{id}")))
        .json(&json!({"targetValue": 0.0}))
        .await
        .json();
    assert_eq!(updated["target"]["progress"], 100.0);
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_empty_string_reference_is_dropped_and_unset(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let client: serde_json::Value = authorized(server.post("/api/clients"))
        .json(&create_test_client_request())
        .await
        .json();
    let client_id = client["client"]["id"].as_str().unwrap().to_string();

    // create with a blank project reference: dropped, not rejected
    let created = authorized(server.post("/api/finance"))
        .json(&json!({
            "type": "income",
            "category": "Consulting",
            "amount": 5000.0,
            "client": client_id,
            "project": "",
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = created.json();
    assert!(created["transaction"]["project"].is_null());
    assert_eq!(created["transaction"]["client"]["id"], json!(client_id));
    let id = created["transaction"]["id"].as_str().unwrap().to_string();

    // update with an explicit empty string: the stored reference is unset
    let updated = authorized(server.put(&format!("/api/finance/{id}")))
        .json(&json!({"client": ""}))
        .await;
    updated.assert_status_ok();
    let updated: serde_json::Value = updated.json();
    assert!(updated["transaction"]["client"].is_null());
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_document_polymorphic_relation_round_trips(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    let client: serde_json::Value = authorized(server.post("/api/clients"))
        .json(&create_test_client_request())
        .await
        .json();
    let client_id = client["client"]["id"].as_str().unwrap().to_string();

    // uploader comes from the forwarded actor header
    let created = authorized(server.post("/api/documents"))
        .add_header(
            axum::http::HeaderName::from_static("x-bizdesk-user-id"),
            axum::http::HeaderValue::from_static("user-1"),
        )
        .json(&json!({
            "name": "Master services agreement",
            "fileUrl": "https://files.example.test/msa.pdf",
            "fileType": "application/pdf",
            "fileSize": 182000,
            "category": "contract",
            "relatedTo": {"model": "Client", "id": client_id},
            "tags": ["legal", "signed"],
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = created.json();
    assert_eq!(created["document"]["relatedTo"]["model"], "Client");
    assert_eq!(created["document"]["relatedTo"]["id"], json!(client_id));

    // an unknown discriminator is a validation error, not a 500
    let rejected = authorized(server.post("/api/documents"))
        .add_header(
            axum::http::HeaderName::from_static("x-bizdesk-user-id"),
            axum::http::HeaderValue::from_static("user-1"),
        )
        .json(&json!({
            "name": "Bad relation",
            "fileUrl": "https://files.example.test/x.pdf",
            "fileType": "application/pdf",
            "fileSize": 1,
            "relatedTo": {"model": "Invoice", "id": client_id},
        }))
        .await;
    rejected.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../bizdesk_db_client/migrations")]
#[ignore]
async fn test_document_upload_requires_an_actor(pool: PgPool) -> sqlx::Result<()> {
    let server = server_with_pool(pool);

    // token is valid but no actor id was forwarded
    let response = authorized(server.post("/api/documents"))
        .json(&json!({
            "name": "Orphan",
            "fileUrl": "https://files.example.test/orphan.pdf",
            "fileType": "application/pdf",
            "fileSize": 1,
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "uploadedBy is required");
    Ok(())
}
