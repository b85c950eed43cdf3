use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Hard delete by id; never cascades to projects or transactions that
/// reference the client. Returns false when no row matched.
#[tracing::instrument(skip(pool))]
pub async fn delete_client(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
