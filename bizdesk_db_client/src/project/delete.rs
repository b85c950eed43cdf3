use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Hard delete by id. The project's tasks go with it (they are sub-entities);
/// transactions and documents that reference the project are left dangling.
#[tracing::instrument(skip(pool))]
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
