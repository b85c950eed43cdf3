use anyhow::Result;
use chrono::Utc;
use models_bizdesk::transaction::request::CreateTransactionRequest;
use models_bizdesk::transaction::TransactionRecord;
use sqlx::PgPool;
use uuid::Uuid;

use super::{TransactionRow, TRANSACTION_COLUMNS};

/// The client/project references arrive pre-normalized: empty form values
/// have already been dropped by the request type.
#[tracing::instrument(skip(pool, request))]
pub async fn create_transaction(
    pool: &PgPool,
    request: &CreateTransactionRequest,
    client_id: Option<Uuid>,
    project_id: Option<Uuid>,
    created_by: Option<&str>,
) -> Result<TransactionRecord> {
    let query = format!(
        "INSERT INTO transactions (type, category, amount, description, date, client_id, \
         project_id, payment_method, status, invoice_number, attachments, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING {TRANSACTION_COLUMNS}"
    );

    let row = sqlx::query_as::<_, TransactionRow>(&query)
        .bind(request.transaction_type.to_string())
        .bind(&request.category)
        .bind(request.amount)
        .bind(&request.description)
        .bind(request.date.unwrap_or_else(Utc::now))
        .bind(client_id)
        .bind(project_id)
        .bind(request.payment_method.to_string())
        .bind(request.status.to_string())
        .bind(&request.invoice_number)
        .bind(&request.attachments)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

    row.try_into()
}
