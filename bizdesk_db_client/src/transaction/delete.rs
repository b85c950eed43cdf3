use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Hard delete by id; documents that reference the transaction keep their
/// now-dangling id.
#[tracing::instrument(skip(pool))]
pub async fn delete_transaction(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
