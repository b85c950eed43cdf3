use anyhow::Result;
use models_bizdesk::transaction::TransactionRecord;
use sqlx::PgPool;

use super::{TransactionRow, TRANSACTION_COLUMNS};

/// Writes a merged record back, replacing the whole row.
/// Returns None when the transaction disappeared between fetch and save.
#[tracing::instrument(skip(pool, record))]
pub async fn save_transaction(
    pool: &PgPool,
    record: &TransactionRecord,
) -> Result<Option<TransactionRecord>> {
    let query = format!(
        "UPDATE transactions SET type = $1, category = $2, amount = $3, description = $4, \
         date = $5, client_id = $6, project_id = $7, payment_method = $8, status = $9, \
         invoice_number = $10, attachments = $11, updated_at = now() \
         WHERE id = $12 \
         RETURNING {TRANSACTION_COLUMNS}"
    );

    let row = sqlx::query_as::<_, TransactionRow>(&query)
        .bind(record.transaction_type.to_string())
        .bind(&record.category)
        .bind(record.amount)
        .bind(&record.description)
        .bind(record.date)
        .bind(record.client_id)
        .bind(record.project_id)
        .bind(record.payment_method.to_string())
        .bind(record.status.to_string())
        .bind(&record.invoice_number)
        .bind(&record.attachments)
        .bind(record.id)
        .fetch_optional(pool)
        .await?;

    row.map(TransactionRecord::try_from).transpose()
}
